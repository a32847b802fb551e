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

pub async fn unimplemented_stub<T: Send>() -> gax::Result<gax::response::Response<T>> {
    unimplemented!(concat!(
        "the stub traits provide a default implementation of each operation, ",
        "so services can add operations without breaking existing mocks. ",
        "The clients override every operation, this error only appears when ",
        "a mock used in a test does not implement an operation. Implement ",
        "the operation in your mock, or open an issue at ",
        "https://github.com/IBM/networking-rust-sdk/issues"
    ));
}
