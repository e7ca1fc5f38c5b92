//! Multipart form model for requests that carry file attachments.
//!
//! The form is a plain value type: it records field names and contents in
//! order and leaves boundary generation to the [`HttpClient`](super::HttpClient)
//! that puts it on the wire.

/// A binary file to upload with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name reported to the server
    pub filename: String,
    /// Optional MIME type (e.g. `image/png`)
    pub content_type: Option<String>,
    /// Raw file contents
    pub data: Vec<u8>,
}

impl Attachment {
    /// Creates an attachment with no explicit MIME type.
    #[must_use]
    pub fn new(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            data: data.into(),
        }
    }

    /// Sets the MIME type of the attachment.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Contents of a single multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain text field
    Text(String),
    /// File part
    File(Attachment),
}

/// A named multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Field name
    pub name: String,
    /// Field contents
    pub value: FieldValue,
}

/// An ordered set of multipart fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    fields: Vec<FormField>,
}

impl MultipartForm {
    /// Name of the text field carrying the JSON-encoded message.
    pub const PAYLOAD_JSON: &'static str = "payload_json";

    /// Creates an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Builds the message upload form.
    ///
    /// Each attachment occupies a field named by its zero-based position,
    /// followed by a `payload_json` text field holding `payload_json`.
    #[must_use]
    pub fn with_attachments(attachments: Vec<Attachment>, payload_json: String) -> Self {
        attachments
            .into_iter()
            .enumerate()
            .fold(Self::new(), |form, (index, attachment)| {
                form.file(index.to_string(), attachment)
            })
            .text(Self::PAYLOAD_JSON, payload_json)
    }

    /// Appends a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FormField {
            name: name.into(),
            value: FieldValue::Text(value.into()),
        });
        self
    }

    /// Appends a file field.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, attachment: Attachment) -> Self {
        self.fields.push(FormField {
            name: name.into(),
            value: FieldValue::File(attachment),
        });
        self
    }

    /// Returns the fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Returns the first field with the given name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    /// Returns the number of file fields.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|field| matches!(field.value, FieldValue::File(_)))
            .count()
    }

    /// Consumes the form, yielding its fields.
    #[must_use]
    pub fn into_fields(self) -> Vec<FormField> {
        self.fields
    }
}
