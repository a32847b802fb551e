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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::EdgeFunctions].
///
/// Application developers may need to implement this trait to mock
/// `client::EdgeFunctions`.  In other use-cases, application developers only
/// use `client::EdgeFunctions` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait EdgeFunctions: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::EdgeFunctions::list_edge_functions_actions].
    fn list_edge_functions_actions(
        &self,
        _req: crate::model::ListEdgeFunctionsActionsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::EdgeFunctionsAction>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::EdgeFunctions::update_edge_functions_action].
    fn update_edge_functions_action(
        &self,
        _req: crate::model::UpdateEdgeFunctionsActionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsAction>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::EdgeFunctions::get_edge_functions_action].
    fn get_edge_functions_action(
        &self,
        _req: crate::model::GetEdgeFunctionsActionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::streaming::ByteStream>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::EdgeFunctions::delete_edge_functions_action].
    fn delete_edge_functions_action(
        &self,
        _req: crate::model::DeleteEdgeFunctionsActionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::EdgeFunctions::create_edge_functions_trigger].
    fn create_edge_functions_trigger(
        &self,
        _req: crate::model::CreateEdgeFunctionsTriggerRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::EdgeFunctions::list_edge_functions_triggers].
    fn list_edge_functions_triggers(
        &self,
        _req: crate::model::ListEdgeFunctionsTriggersRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::EdgeFunctionsTrigger>>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::EdgeFunctions::get_edge_functions_trigger].
    fn get_edge_functions_trigger(
        &self,
        _req: crate::model::GetEdgeFunctionsTriggerRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsTrigger>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::EdgeFunctions::update_edge_functions_trigger].
    fn update_edge_functions_trigger(
        &self,
        _req: crate::model::UpdateEdgeFunctionsTriggerRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsTrigger>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::EdgeFunctions::delete_edge_functions_trigger].
    fn delete_edge_functions_trigger(
        &self,
        _req: crate::model::DeleteEdgeFunctionsTriggerRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
