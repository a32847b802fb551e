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

//! The `User-Agent` header sent by all clients.

/// Each service crate declares one static instance of this struct. The HTTP
/// client formats it into the default `User-Agent` header when it is created.
#[derive(Debug, PartialEq)]
pub struct ClientInfo {
    /// The name of the service crate, e.g. `direct-link`.
    pub name: &'static str,
    /// The version of the service crate.
    pub version: &'static str,
}

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl ClientInfo {
    /// Format the struct as needed for the `User-Agent` header.
    pub fn header_value(&self) -> String {
        // Strip out the initial "rustc " string from `RUSTC_VERSION`. If not
        // found, leave RUSTC_VERSION unchanged.
        let rustc_version = build_info::RUSTC_VERSION;
        let rustc_version = rustc_version
            .strip_prefix("rustc ")
            .unwrap_or(rustc_version);
        format!(
            "ibm-cloud-networking-rust/{} (lang=rust; rustc={rustc_version}) {}/{}",
            build_info::PKG_VERSION,
            self.name,
            self.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format() {
        let info = ClientInfo {
            name: "transit-gateway",
            version: "1.2.3",
        };
        let value = info.header_value();
        let (runtime, library) = value.rsplit_once(' ').unwrap();
        assert_eq!(library, "transit-gateway/1.2.3");
        assert!(
            runtime.starts_with(&format!(
                "ibm-cloud-networking-rust/{} (lang=rust; rustc=",
                build_info::PKG_VERSION
            )),
            "{value}"
        );
        assert!(!runtime.contains("rustc=rustc"), "{value}");
        assert!(http::HeaderValue::from_str(&value).is_ok(), "{value}");
    }
}
