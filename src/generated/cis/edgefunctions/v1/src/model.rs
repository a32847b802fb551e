// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The types used by the edge functions operations.
//!
//! Edge functions actions are JavaScript programs running in the edge
//! network. Triggers route the requests matching a pattern to an action.

/// An edge functions action.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct EdgeFunctionsAction {
    /// The action name.
    pub script: String,

    pub etag: String,

    /// The event handlers defined by the script, for example `fetch`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub handlers: Vec<String>,

    /// The triggers using this action.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<EdgeFunctionsTrigger>,

    pub created_on: Option<String>,

    pub modified_on: Option<String>,
}

impl EdgeFunctionsAction {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [script][EdgeFunctionsAction::script].
    pub fn set_script<T: Into<String>>(mut self, v: T) -> Self {
        self.script = v.into();
        self
    }

    /// Sets the value of [etag][EdgeFunctionsAction::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = v.into();
        self
    }

    /// Sets the value of [handlers][EdgeFunctionsAction::handlers].
    pub fn set_handlers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.handlers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [routes][EdgeFunctionsAction::routes].
    pub fn set_routes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<EdgeFunctionsTrigger>,
    {
        self.routes = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [created_on][EdgeFunctionsAction::created_on].
    pub fn set_created_on<T: Into<String>>(mut self, v: T) -> Self {
        self.created_on = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_on][EdgeFunctionsAction::created_on].
    pub fn set_or_clear_created_on<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.created_on = v.map(|x| x.into());
        self
    }

    /// Sets the value of [modified_on][EdgeFunctionsAction::modified_on].
    pub fn set_modified_on<T: Into<String>>(mut self, v: T) -> Self {
        self.modified_on = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [modified_on][EdgeFunctionsAction::modified_on].
    pub fn set_or_clear_modified_on<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.modified_on = v.map(|x| x.into());
        self
    }
}

/// An edge functions trigger.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct EdgeFunctionsTrigger {
    /// The trigger identifier.
    pub id: String,

    /// The URL pattern, for example `example.com/images/*`.
    pub pattern: String,

    /// The name of the action run for matching requests.
    pub script: String,

    /// Whether requests are sent to the origin when the request limit is exceeded.
    pub request_limit_fail_open: bool,
}

impl EdgeFunctionsTrigger {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][EdgeFunctionsTrigger::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [pattern][EdgeFunctionsTrigger::pattern].
    pub fn set_pattern<T: Into<String>>(mut self, v: T) -> Self {
        self.pattern = v.into();
        self
    }

    /// Sets the value of [script][EdgeFunctionsTrigger::script].
    pub fn set_script<T: Into<String>>(mut self, v: T) -> Self {
        self.script = v.into();
        self
    }

    /// Sets the value of [request_limit_fail_open][EdgeFunctionsTrigger::request_limit_fail_open].
    pub fn set_request_limit_fail_open<T: Into<bool>>(mut self, v: T) -> Self {
        self.request_limit_fail_open = v.into();
        self
    }
}

/// The identifier of a created or deleted resource.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResourceId {
    pub id: String,
}

impl ResourceId {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][ResourceId::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [list_edge_functions_actions][crate::client::EdgeFunctions::list_edge_functions_actions].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListEdgeFunctionsActionsRequest {
    /// Uniquely identifies the request, forwarded in the `X-Correlation-ID` header.
    pub x_correlation_id: Option<String>,
}

impl ListEdgeFunctionsActionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [x_correlation_id][ListEdgeFunctionsActionsRequest::x_correlation_id].
    pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][ListEdgeFunctionsActionsRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request for [update_edge_functions_action][crate::client::EdgeFunctions::update_edge_functions_action].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateEdgeFunctionsActionRequest {
    /// The action name.
    ///
    /// This is a **required** field for requests.
    pub script_name: String,

    /// The JavaScript source of the action.
    ///
    /// This is a **required** field for requests.
    pub edge_functions_action: bytes::Bytes,

    /// Uniquely identifies the request, forwarded in the `X-Correlation-ID` header.
    pub x_correlation_id: Option<String>,
}

impl UpdateEdgeFunctionsActionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [script_name][UpdateEdgeFunctionsActionRequest::script_name].
    pub fn set_script_name<T: Into<String>>(mut self, v: T) -> Self {
        self.script_name = v.into();
        self
    }

    /// Sets the value of [edge_functions_action][UpdateEdgeFunctionsActionRequest::edge_functions_action].
    pub fn set_edge_functions_action<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.edge_functions_action = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][UpdateEdgeFunctionsActionRequest::x_correlation_id].
    pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][UpdateEdgeFunctionsActionRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request for [get_edge_functions_action][crate::client::EdgeFunctions::get_edge_functions_action].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetEdgeFunctionsActionRequest {
    /// The action name.
    ///
    /// This is a **required** field for requests.
    pub script_name: String,

    /// Uniquely identifies the request, forwarded in the `X-Correlation-ID` header.
    pub x_correlation_id: Option<String>,
}

impl GetEdgeFunctionsActionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [script_name][GetEdgeFunctionsActionRequest::script_name].
    pub fn set_script_name<T: Into<String>>(mut self, v: T) -> Self {
        self.script_name = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][GetEdgeFunctionsActionRequest::x_correlation_id].
    pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][GetEdgeFunctionsActionRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request for [delete_edge_functions_action][crate::client::EdgeFunctions::delete_edge_functions_action].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteEdgeFunctionsActionRequest {
    /// The action name.
    ///
    /// This is a **required** field for requests.
    pub script_name: String,

    /// Uniquely identifies the request, forwarded in the `X-Correlation-ID` header.
    pub x_correlation_id: Option<String>,
}

impl DeleteEdgeFunctionsActionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [script_name][DeleteEdgeFunctionsActionRequest::script_name].
    pub fn set_script_name<T: Into<String>>(mut self, v: T) -> Self {
        self.script_name = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][DeleteEdgeFunctionsActionRequest::x_correlation_id].
    pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][DeleteEdgeFunctionsActionRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request for [create_edge_functions_trigger][crate::client::EdgeFunctions::create_edge_functions_trigger].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateEdgeFunctionsTriggerRequest {
    /// The URL pattern, for example `example.com/images/*`.
    pub pattern: Option<String>,

    /// The name of the action run for matching requests.
    pub script: Option<String>,

    /// Uniquely identifies the request, forwarded in the `X-Correlation-ID` header.
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
}

impl CreateEdgeFunctionsTriggerRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [pattern][CreateEdgeFunctionsTriggerRequest::pattern].
    pub fn set_pattern<T: Into<String>>(mut self, v: T) -> Self {
        self.pattern = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [pattern][CreateEdgeFunctionsTriggerRequest::pattern].
    pub fn set_or_clear_pattern<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.pattern = v.map(|x| x.into());
        self
    }

    /// Sets the value of [script][CreateEdgeFunctionsTriggerRequest::script].
    pub fn set_script<T: Into<String>>(mut self, v: T) -> Self {
        self.script = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [script][CreateEdgeFunctionsTriggerRequest::script].
    pub fn set_or_clear_script<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.script = v.map(|x| x.into());
        self
    }

    /// Sets the value of [x_correlation_id][CreateEdgeFunctionsTriggerRequest::x_correlation_id].
    pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][CreateEdgeFunctionsTriggerRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request for [list_edge_functions_triggers][crate::client::EdgeFunctions::list_edge_functions_triggers].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListEdgeFunctionsTriggersRequest {
    /// Uniquely identifies the request, forwarded in the `X-Correlation-ID` header.
    pub x_correlation_id: Option<String>,
}

impl ListEdgeFunctionsTriggersRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [x_correlation_id][ListEdgeFunctionsTriggersRequest::x_correlation_id].
    pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][ListEdgeFunctionsTriggersRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request for [get_edge_functions_trigger][crate::client::EdgeFunctions::get_edge_functions_trigger].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetEdgeFunctionsTriggerRequest {
    /// The trigger identifier.
    ///
    /// This is a **required** field for requests.
    pub route_id: String,

    /// Uniquely identifies the request, forwarded in the `X-Correlation-ID` header.
    pub x_correlation_id: Option<String>,
}

impl GetEdgeFunctionsTriggerRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [route_id][GetEdgeFunctionsTriggerRequest::route_id].
    pub fn set_route_id<T: Into<String>>(mut self, v: T) -> Self {
        self.route_id = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][GetEdgeFunctionsTriggerRequest::x_correlation_id].
    pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][GetEdgeFunctionsTriggerRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request for [update_edge_functions_trigger][crate::client::EdgeFunctions::update_edge_functions_trigger].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateEdgeFunctionsTriggerRequest {
    /// The trigger identifier.
    ///
    /// This is a **required** field for requests.
    #[serde(skip)]
    pub route_id: String,

    /// The new URL pattern.
    pub pattern: Option<String>,

    /// The new action name.
    pub script: Option<String>,

    /// Uniquely identifies the request, forwarded in the `X-Correlation-ID` header.
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
}

impl UpdateEdgeFunctionsTriggerRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [route_id][UpdateEdgeFunctionsTriggerRequest::route_id].
    pub fn set_route_id<T: Into<String>>(mut self, v: T) -> Self {
        self.route_id = v.into();
        self
    }

    /// Sets the value of [pattern][UpdateEdgeFunctionsTriggerRequest::pattern].
    pub fn set_pattern<T: Into<String>>(mut self, v: T) -> Self {
        self.pattern = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [pattern][UpdateEdgeFunctionsTriggerRequest::pattern].
    pub fn set_or_clear_pattern<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.pattern = v.map(|x| x.into());
        self
    }

    /// Sets the value of [script][UpdateEdgeFunctionsTriggerRequest::script].
    pub fn set_script<T: Into<String>>(mut self, v: T) -> Self {
        self.script = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [script][UpdateEdgeFunctionsTriggerRequest::script].
    pub fn set_or_clear_script<T: Into<String>>(mut self, v: std::option::Option<T>) -> Self {
        self.script = v.map(|x| x.into());
        self
    }

    /// Sets the value of [x_correlation_id][UpdateEdgeFunctionsTriggerRequest::x_correlation_id].
    pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][UpdateEdgeFunctionsTriggerRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}

/// The request for [delete_edge_functions_trigger][crate::client::EdgeFunctions::delete_edge_functions_trigger].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteEdgeFunctionsTriggerRequest {
    /// The trigger identifier.
    ///
    /// This is a **required** field for requests.
    pub route_id: String,

    /// Uniquely identifies the request, forwarded in the `X-Correlation-ID` header.
    pub x_correlation_id: Option<String>,
}

impl DeleteEdgeFunctionsTriggerRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [route_id][DeleteEdgeFunctionsTriggerRequest::route_id].
    pub fn set_route_id<T: Into<String>>(mut self, v: T) -> Self {
        self.route_id = v.into();
        self
    }

    /// Sets the value of [x_correlation_id][DeleteEdgeFunctionsTriggerRequest::x_correlation_id].
    pub fn set_x_correlation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.x_correlation_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [x_correlation_id][DeleteEdgeFunctionsTriggerRequest::x_correlation_id].
    pub fn set_or_clear_x_correlation_id<T: Into<String>>(
        mut self,
        v: std::option::Option<T>,
    ) -> Self {
        self.x_correlation_id = v.map(|x| x.into());
        self
    }
}
