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

use crate::Result;

/// Implements a [EdgeFunctions](super::stub::EdgeFunctions) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct EdgeFunctions<T>
where
    T: super::stub::EdgeFunctions + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> EdgeFunctions<T>
where
    T: super::stub::EdgeFunctions + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::EdgeFunctions for EdgeFunctions<T>
where
    T: super::stub::EdgeFunctions + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(level = "debug", ret)]
    async fn list_edge_functions_actions(
        &self,
        req: crate::model::ListEdgeFunctionsActionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::EdgeFunctionsAction>>>,
    > {
        self.inner.list_edge_functions_actions(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_edge_functions_action(
        &self,
        req: crate::model::UpdateEdgeFunctionsActionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsAction>>,
    > {
        self.inner.update_edge_functions_action(req, options).await
    }

    #[tracing::instrument(level = "debug")]
    async fn get_edge_functions_action(
        &self,
        req: crate::model::GetEdgeFunctionsActionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::streaming::ByteStream>> {
        self.inner.get_edge_functions_action(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_edge_functions_action(
        &self,
        req: crate::model::DeleteEdgeFunctionsActionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>> {
        self.inner.delete_edge_functions_action(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn create_edge_functions_trigger(
        &self,
        req: crate::model::CreateEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>> {
        self.inner.create_edge_functions_trigger(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn list_edge_functions_triggers(
        &self,
        req: crate::model::ListEdgeFunctionsTriggersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<Vec<crate::model::EdgeFunctionsTrigger>>>,
    > {
        self.inner.list_edge_functions_triggers(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn get_edge_functions_trigger(
        &self,
        req: crate::model::GetEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsTrigger>>,
    > {
        self.inner.get_edge_functions_trigger(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn update_edge_functions_trigger(
        &self,
        req: crate::model::UpdateEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<gax::envelope::Envelope<crate::model::EdgeFunctionsTrigger>>,
    > {
        self.inner.update_edge_functions_trigger(req, options).await
    }

    #[tracing::instrument(level = "debug", ret)]
    async fn delete_edge_functions_trigger(
        &self,
        req: crate::model::DeleteEdgeFunctionsTriggerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<gax::envelope::Envelope<crate::model::ResourceId>>> {
        self.inner.delete_edge_functions_trigger(req, options).await
    }
}
