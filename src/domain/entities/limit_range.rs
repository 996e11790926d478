//! Limit range entity

use serde::{Deserialize, Serialize};

use super::ObjectMeta;
use crate::domain::value_objects::ResourceList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitType {
    Pod,
    Container,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitRange {
    #[serde(rename = "apiVersion", skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    pub metadata: ObjectMeta,
    pub spec: LimitRangeSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitRangeSpec {
    pub limits: Vec<LimitRangeItem>,
}

/// Resource bounds for one object type inside a namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LimitRangeItem {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub limit_type: Option<LimitType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<ResourceList>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<ResourceList>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ResourceList>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_request: Option<ResourceList>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_limit_request_ratio: Option<ResourceList>,
}

impl LimitRangeItem {
    pub fn container() -> Self {
        Self {
            limit_type: Some(LimitType::Container),
            ..Self::default()
        }
    }
}
