//! Model detail and create-request shaping
//!
//! Pure conversions between the model server's JSON payloads and the views the
//! model manager works with. Nothing here talks to the network.

use serde::{Deserialize, Serialize};

use crate::block::{self, RawPair};
use crate::error::{ParseError, ValidationError};
use crate::registry::ParameterRegistry;
use crate::validate::validate;
use crate::value::{ParameterInput, ValidatedParameters};

/// The server's list response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub models: Vec<ListedModel>,
}

/// One entry of the list response. Only the fields the summary needs are read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListedModel {
    pub model: String,
    pub size: u64,
    #[serde(default)]
    pub modified_at: Option<String>,
}

/// Summary row for one installed model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub name: String,
    pub size: u64,
    pub modified_at: String,
}

impl ModelInfo {
    /// Summaries for every model in a list response, in server order.
    pub fn from_list(list: ListResponse) -> Vec<Self> {
        list.models.into_iter().map(Self::from).collect()
    }
}

impl From<ListedModel> for ModelInfo {
    fn from(listed: ListedModel) -> Self {
        Self {
            name: listed.model,
            size: listed.size,
            modified_at: listed.modified_at.unwrap_or_default(),
        }
    }
}

/// The part of the server's show response this crate consumes
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShowResponse {
    pub parameters: Option<String>,
    pub template: Option<String>,
    pub modified_at: Option<String>,
    pub size: Option<u64>,
}

/// Display-ready details of a single model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDetail {
    pub name: String,
    pub size: u64,
    pub modified_at: String,
    pub parameters: Vec<RawPair>,
    pub template: String,
}

impl ModelDetail {
    /// Build the detail view for `name`.
    ///
    /// Malformed parameter lines are skipped and returned next to the detail so
    /// the caller can report them.
    pub fn from_show(name: impl Into<String>, show: ShowResponse) -> (Self, Vec<ParseError>) {
        let parsed = block::parse_lenient(show.parameters.as_deref().unwrap_or_default());

        let detail = Self {
            name: name.into(),
            size: show.size.unwrap_or_default(),
            modified_at: show.modified_at.unwrap_or_default(),
            parameters: parsed.pairs,
            template: show.template.unwrap_or_default(),
        };

        (detail, parsed.skipped)
    }
}

/// Request to create `model` from an existing `base` model
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CopyModelRequest {
    pub model: String,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub parameters: Option<ParameterInput>,
    #[serde(default)]
    pub template: Option<String>,
}

/// Body of the server's create call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateModelRequest {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ValidatedParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl CopyModelRequest {
    /// Validate the requested parameters and build the create request body.
    ///
    /// Absent or empty parameters are left out of the body.
    pub fn into_create_request(
        self,
        registry: &ParameterRegistry,
    ) -> Result<CreateModelRequest, ValidationError> {
        let parameters = match self.parameters {
            Some(input) if !input.is_empty() => Some(validate(&input, registry)?),
            _ => None,
        };

        Ok(CreateModelRequest {
            model: self.model,
            from: self.base,
            parameters,
            template: self.template,
        })
    }
}
