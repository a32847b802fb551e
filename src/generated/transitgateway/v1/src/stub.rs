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

/// Defines the trait used to implement [super::client::TransitGateway].
///
/// Application developers may need to implement this trait to mock
/// `client::TransitGateway`.  In other use-cases, application developers only
/// use `client::TransitGateway` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait TransitGateway: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::TransitGateway::list_connections].
    fn list_connections(
        &self,
        _req: crate::model::ListConnectionsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::TransitConnectionCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TransitGateway::list_transit_gateways].
    fn list_transit_gateways(
        &self,
        _req: crate::model::ListTransitGatewaysRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::TransitGatewayCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TransitGateway::create_transit_gateway].
    fn create_transit_gateway(
        &self,
        _req: crate::model::CreateTransitGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::TransitGateway>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TransitGateway::delete_transit_gateway].
    fn delete_transit_gateway(
        &self,
        _req: crate::model::DeleteTransitGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TransitGateway::get_transit_gateway].
    fn get_transit_gateway(
        &self,
        _req: crate::model::GetTransitGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::TransitGateway>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TransitGateway::update_transit_gateway].
    fn update_transit_gateway(
        &self,
        _req: crate::model::UpdateTransitGatewayRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::TransitGateway>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TransitGateway::list_transit_gateway_connections].
    fn list_transit_gateway_connections(
        &self,
        _req: crate::model::ListTransitGatewayConnectionsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::TransitGatewayConnectionCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TransitGateway::create_transit_gateway_connection].
    fn create_transit_gateway_connection(
        &self,
        _req: crate::model::CreateTransitGatewayConnectionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::TransitGatewayConnection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TransitGateway::delete_transit_gateway_connection].
    fn delete_transit_gateway_connection(
        &self,
        _req: crate::model::DeleteTransitGatewayConnectionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TransitGateway::get_transit_gateway_connection].
    fn get_transit_gateway_connection(
        &self,
        _req: crate::model::GetTransitGatewayConnectionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::TransitGatewayConnection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TransitGateway::update_transit_gateway_connection].
    fn update_transit_gateway_connection(
        &self,
        _req: crate::model::UpdateTransitGatewayConnectionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::TransitGatewayConnection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TransitGateway::create_transit_gateway_connection_actions].
    fn create_transit_gateway_connection_actions(
        &self,
        _req: crate::model::CreateTransitGatewayConnectionActionsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TransitGateway::list_gateway_locations].
    fn list_gateway_locations(
        &self,
        _req: crate::model::ListGatewayLocationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::TsCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::TransitGateway::get_gateway_location].
    fn get_gateway_location(
        &self,
        _req: crate::model::GetGatewayLocationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::TsLocation>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
