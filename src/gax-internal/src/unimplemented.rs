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

use gax::error::Error;
use gax::error::rpc::{Code, Status};

/// The result of every default method in the stub traits.
///
/// The clients override all the stub methods, this error only appears in
/// test code mocking a stub without implementing every method it calls.
pub async fn unimplemented_stub<T: Send>(rpc: &'static str) -> gax::Result<T> {
    Err(Error::service(
        Status::default()
            .set_code(Code::Unimplemented)
            .set_message(format!(
                "{rpc} is not implemented by this stub, verify that your mock implements it"
            )),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unimplemented() {
        let err = unimplemented_stub::<()>("GetFunction").await.unwrap_err();
        let status = err.status().cloned().unwrap_or_default();
        assert_eq!(status.code, Code::Unimplemented);
        assert!(status.message.contains("GetFunction"), "{status:?}");
    }
}
