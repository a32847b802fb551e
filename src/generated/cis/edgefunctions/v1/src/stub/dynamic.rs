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

/// A dyn-compatible, crate-private version of [super::EdgeFunctions].
#[async_trait::async_trait]
pub trait EdgeFunctions: std::fmt::Debug + Send + Sync {
    async fn list_edge_functions_actions(
        &self,
        req: crate::model::ListEdgeFunctionsActionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::EdgeFunctionsAction>>>>;

    async fn update_edge_functions_action(
        &self,
        req: crate::model::UpdateEdgeFunctionsActionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsAction>>>;

    async fn get_edge_functions_action(
        &self,
        req: crate::model::GetEdgeFunctionsActionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::streaming::ByteStream>>;

    async fn delete_edge_functions_action(
        &self,
        req: crate::model::DeleteEdgeFunctionsActionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>>;

    async fn create_edge_functions_trigger(
        &self,
        req: crate::model::CreateEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>>;

    async fn list_edge_functions_triggers(
        &self,
        req: crate::model::ListEdgeFunctionsTriggersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<Vec<crate::model::EdgeFunctionsTrigger>>>>;

    async fn get_edge_functions_trigger(
        &self,
        req: crate::model::GetEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsTrigger>>>;

    async fn update_edge_functions_trigger(
        &self,
        req: crate::model::UpdateEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsTrigger>>>;

    async fn delete_edge_functions_trigger(
        &self,
        req: crate::model::DeleteEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>>;
}

/// All implementations of [super::EdgeFunctions] also implement [EdgeFunctions].
#[async_trait::async_trait]
impl<T: super::EdgeFunctions> EdgeFunctions for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_edge_functions_actions(
        &self,
        req: crate::model::ListEdgeFunctionsActionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::EdgeFunctionsAction>>>,
    > {
        T::list_edge_functions_actions(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_edge_functions_action(
        &self,
        req: crate::model::UpdateEdgeFunctionsActionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsAction>>,
    > {
        T::update_edge_functions_action(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_edge_functions_action(
        &self,
        req: crate::model::GetEdgeFunctionsActionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::streaming::ByteStream>> {
        T::get_edge_functions_action(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_edge_functions_action(
        &self,
        req: crate::model::DeleteEdgeFunctionsActionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>> {
        T::delete_edge_functions_action(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_edge_functions_trigger(
        &self,
        req: crate::model::CreateEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>> {
        T::create_edge_functions_trigger(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_edge_functions_triggers(
        &self,
        req: crate::model::ListEdgeFunctionsTriggersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::EdgeFunctionsTrigger>>>,
    > {
        T::list_edge_functions_triggers(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_edge_functions_trigger(
        &self,
        req: crate::model::GetEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsTrigger>>,
    > {
        T::get_edge_functions_trigger(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_edge_functions_trigger(
        &self,
        req: crate::model::UpdateEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsTrigger>>,
    > {
        T::update_edge_functions_trigger(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_edge_functions_trigger(
        &self,
        req: crate::model::DeleteEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>> {
        T::delete_edge_functions_trigger(self, req, options).await
    }
}
