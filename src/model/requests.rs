/******************************************************************************
   Author: easy-sharepoint contributors
   Date: 16/10/26
******************************************************************************/
use crate::constants::DEFAULT_LIST_TEMPLATE;
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Base templates a list can be created from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListTemplate {
    /// 100
    CustomList,
    /// 101
    DocumentLibrary,
    /// 102
    Survey,
    /// 103
    Links,
    /// 104
    Announcements,
    /// 105
    Contacts,
    /// 106
    Calendar,
    /// 107
    Tasks,
    /// 108
    DiscussionBoard,
    /// 109
    PictureLibrary,
    /// 110
    DataSources,
    /// 111
    SiteTemplateGallery,
    /// 112
    UserInformation,
    /// 113
    WebPartGallery,
}

impl ListTemplate {
    /// Numeric `BaseTemplate` value
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            ListTemplate::CustomList => 100,
            ListTemplate::DocumentLibrary => 101,
            ListTemplate::Survey => 102,
            ListTemplate::Links => 103,
            ListTemplate::Announcements => 104,
            ListTemplate::Contacts => 105,
            ListTemplate::Calendar => 106,
            ListTemplate::Tasks => 107,
            ListTemplate::DiscussionBoard => 108,
            ListTemplate::PictureLibrary => 109,
            ListTemplate::DataSources => 110,
            ListTemplate::SiteTemplateGallery => 111,
            ListTemplate::UserInformation => 112,
            ListTemplate::WebPartGallery => 113,
        }
    }
}

impl From<ListTemplate> for u32 {
    fn from(template: ListTemplate) -> Self {
        template.code()
    }
}

/// `FieldTypeKind` values, 0 to 31
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(i32)]
pub enum FieldType {
    /// Not used
    Invalid = 0,
    /// Integer value
    Integer = 1,
    /// Limited-length text
    #[default]
    Text = 2,
    /// Larger amounts of text
    Note = 3,
    /// Date and time, or date only
    DateTime = 4,
    /// Monotonically increasing identifier
    Counter = 5,
    /// Selection from a set of values
    Choice = 6,
    /// Reference to another list item
    Lookup = 7,
    /// True or false
    Boolean = 8,
    /// Positive or negative number
    Number = 9,
    /// Currency amount
    Currency = 10,
    /// URL and optional description
    Url = 11,
    /// Rendered from other columns
    Computed = 12,
    /// Discussion board threading data
    Threading = 13,
    /// GUID value
    Guid = 14,
    /// One or more values from a set
    MultiChoice = 15,
    /// Multiple number scales
    GridChoice = 16,
    /// Calculated from other columns
    Calculated = 17,
    /// Reference to a file
    File = 18,
    /// Whether the item has attachments
    Attachments = 19,
    /// Lookup into the user information list
    User = 20,
    /// Recurrence pattern
    Recurrence = 21,
    /// Link to a meeting workspace
    CrossProjectLink = 22,
    /// Moderation status
    ModStat = 23,
    /// Error
    Error = 24,
    /// Content type identifier
    ContentTypeId = 25,
    /// Survey page separator
    PageSeparator = 26,
    /// Discussion board thread index
    ThreadIndex = 27,
    /// Workflow status
    WorkflowStatus = 28,
    /// All day event flag
    AllDayEvent = 29,
    /// Workflow event type
    WorkflowEventType = 30,
    /// Maximum number of items
    MaxItems = 31,
}

impl FieldType {
    /// Numeric `FieldTypeKind` value
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Looks up a field type by its numeric value
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        use FieldType::*;
        const ALL: [FieldType; 32] = [
            Invalid,
            Integer,
            Text,
            Note,
            DateTime,
            Counter,
            Choice,
            Lookup,
            Boolean,
            Number,
            Currency,
            Url,
            Computed,
            Threading,
            Guid,
            MultiChoice,
            GridChoice,
            Calculated,
            File,
            Attachments,
            User,
            Recurrence,
            CrossProjectLink,
            ModStat,
            Error,
            ContentTypeId,
            PageSeparator,
            ThreadIndex,
            WorkflowStatus,
            AllDayEvent,
            WorkflowEventType,
            MaxItems,
        ];
        usize::try_from(code).ok().and_then(|i| ALL.get(i).copied())
    }
}

impl From<FieldType> for i32 {
    fn from(kind: FieldType) -> Self {
        kind.code()
    }
}

/// Kind of version produced by a check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckInType {
    /// Minor version
    #[default]
    Minor,
    /// Major version
    Major,
    /// Overwrite the current version
    Overwrite,
}

impl CheckInType {
    /// Numeric `checkintype` value
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            CheckInType::Minor => 0,
            CheckInType::Major => 1,
            CheckInType::Overwrite => 2,
        }
    }
}

/// Settings for a new list
///
/// Defaults: empty description, custom list template (100), content types
/// allowed and enabled, no extra properties.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewList {
    /// List title, required
    pub title: String,
    /// List description
    pub description: String,
    /// `BaseTemplate` code
    pub base_template: u32,
    /// `AllowContentTypes` flag
    pub allow_content_types: bool,
    /// `ContentTypesEnabled` flag
    pub content_types_enabled: bool,
    /// Additional OData properties, applied last
    pub extra: Map<String, Value>,
}

impl NewList {
    /// Creates list settings with the documented defaults
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            base_template: DEFAULT_LIST_TEMPLATE,
            allow_content_types: true,
            content_types_enabled: true,
            extra: Map::new(),
        }
    }

    /// Sets the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the base template
    #[must_use]
    pub fn template(mut self, template: impl Into<u32>) -> Self {
        self.base_template = template.into();
        self
    }

    /// Sets the `AllowContentTypes` flag
    #[must_use]
    pub fn allow_content_types(mut self, allow: bool) -> Self {
        self.allow_content_types = allow;
        self
    }

    /// Sets the `ContentTypesEnabled` flag
    #[must_use]
    pub fn content_types_enabled(mut self, enabled: bool) -> Self {
        self.content_types_enabled = enabled;
        self
    }

    /// Adds an extra OData property
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Rejects settings SharePoint would refuse
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidInput("list title must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Settings for a new list column
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewField {
    /// Column title
    pub title: String,
    /// `FieldTypeKind` code, sent as is
    pub kind: i32,
}

impl NewField {
    /// Creates a column of the given type
    pub fn new(title: impl Into<String>, kind: FieldType) -> Self {
        Self {
            title: title.into(),
            kind: kind.code(),
        }
    }

    /// Creates a column from a raw `FieldTypeKind` code
    pub fn with_kind_code(title: impl Into<String>, kind: i32) -> Self {
        Self {
            title: title.into(),
            kind,
        }
    }

    /// Named field type, when the code is a known one
    #[must_use]
    pub fn field_type(&self) -> Option<FieldType> {
        FieldType::from_code(self.kind)
    }

    /// Rejects settings SharePoint would refuse
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidInput("field title must not be empty".to_string()));
        }
        Ok(())
    }
}
