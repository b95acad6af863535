//! Optional data attached to other records
//!
//! An attachment association links rows of some data type to an owning
//! record (the *element*). Each association is described once, as a constant
//! [`AttachmentSpec`], and its rows are plain [`Attachment<D>`] values.
//!
//! ```rust,ignore
//! const NOTE_ON_ARTICLE: AttachmentSpec = AttachmentSpec::new("Article", "Note")
//!     .with_app_label("blog")
//!     .with_foreign_key("article_id");
//!
//! assert_eq!(NOTE_ON_ARTICLE.model_name(), "ArticleNote");
//! let notes = attachments_for(&NOTE_ON_ARTICLE, &store, article.id).await?;
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::{trace, Instrument};

use crate::errors::StoreError;
use crate::store::{Record, RecordId, RecordStore};
use crate::tracing::spans;

/// Declarative description of a one-to-many attachment association
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentSpec {
    target: &'static str,
    data: &'static str,
    model_name: Option<&'static str>,
    app_label: Option<&'static str>,
    table: Option<&'static str>,
    id_column: &'static str,
    foreign_key: Option<&'static str>,
}

impl AttachmentSpec {
    /// Attaches rows of type `data` to records of type `target`
    pub const fn new(target: &'static str, data: &'static str) -> Self {
        Self {
            target,
            data,
            model_name: None,
            app_label: None,
            table: None,
            id_column: "id",
            foreign_key: None,
        }
    }

    pub const fn with_model_name(mut self, model_name: &'static str) -> Self {
        self.model_name = Some(model_name);
        self
    }

    pub const fn with_app_label(mut self, app_label: &'static str) -> Self {
        self.app_label = Some(app_label);
        self
    }

    pub const fn with_table(mut self, table: &'static str) -> Self {
        self.table = Some(table);
        self
    }

    pub const fn with_id_column(mut self, id_column: &'static str) -> Self {
        self.id_column = id_column;
        self
    }

    pub const fn with_foreign_key(mut self, foreign_key: &'static str) -> Self {
        self.foreign_key = Some(foreign_key);
        self
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn data(&self) -> &'static str {
        self.data
    }

    /// Name of the association model, `<Target><Data>` unless overridden
    pub fn model_name(&self) -> Cow<'static, str> {
        match self.model_name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("{}{}", self.target, self.data)),
        }
    }

    pub fn app_label(&self) -> Option<&'static str> {
        self.app_label
    }

    /// Explicit table name; `None` leaves naming to the store
    pub fn table(&self) -> Option<&'static str> {
        self.table
    }

    pub fn id_column(&self) -> &'static str {
        self.id_column
    }

    pub fn foreign_key(&self) -> Option<&'static str> {
        self.foreign_key
    }

    /// An association without an owning element column stands alone
    pub fn is_standalone(&self) -> bool {
        self.foreign_key.is_none()
    }
}

/// One attached row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment<D> {
    pub id: RecordId,
    /// Key of the owning record; `None` once the owner is gone
    pub element: Option<RecordId>,
    pub data: D,
}

impl<D> Attachment<D> {
    pub fn new(id: RecordId, element: Option<RecordId>, data: D) -> Self {
        Self { id, element, data }
    }

    pub fn is_attached_to(&self, element: RecordId) -> bool {
        self.element == Some(element)
    }
}

impl<D> Record for Attachment<D>
where
    D: Clone + Send + Sync + 'static,
{
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Rows of the association owned by `element`, ordered by key
pub async fn attachments_for<D, S>(
    spec: &AttachmentSpec,
    store: &S,
    element: RecordId,
) -> Result<Vec<Attachment<D>>, StoreError>
where
    D: Clone + Send + Sync + 'static,
    S: RecordStore<Attachment<D>> + ?Sized,
{
    let model = spec.model_name();
    let span = spans::attachments_for(&model, element);
    async move {
        let rows = store
            .query_all(&move |row: &Attachment<D>| row.is_attached_to(element))
            .await?;
        trace!(count = rows.len(), "Loaded attachments");
        Ok(rows)
    }
    .instrument(span)
    .await
}
