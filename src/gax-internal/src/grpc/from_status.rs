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
use gax::error::rpc::Status;
use prost::Message;
use std::error::Error as _;

fn to_gax_status(status: &tonic::Status) -> Status {
    Status::default()
        .set_code(status.code() as i32)
        .set_message(status.message())
}

/// Returns the `google.rpc.Status` carried by a service error.
///
/// The error details are kept in their wire format, use this function to
/// decode them.
pub fn rpc_status(error: &Error) -> Option<common::rpc::Status> {
    let status = error.source()?.downcast_ref::<tonic::Status>()?;
    if status.details().is_empty() {
        return None;
    }
    common::rpc::Status::decode(status.details()).ok()
}

fn as_inner<T>(status: &tonic::Status) -> Option<&T>
where
    T: std::error::Error + 'static,
{
    let mut e = status.source()?;
    // Guard against cycles in the `source()` chain.
    for _ in 0..32 {
        if let Some(value) = e.downcast_ref::<T>() {
            return Some(value);
        }
        e = e.source()?;
    }
    None
}

/// Converts a [tonic::Status] into the error type used by the clients.
pub fn to_gax_error(status: tonic::Status) -> Error {
    if as_inner::<tonic::TimeoutExpired>(&status).is_some() {
        return Error::timeout(status);
    }
    if as_inner::<tonic::ConnectError>(&status).is_some() {
        return Error::io(status);
    }
    let headers = status.metadata().clone().into_headers();
    if as_inner::<tonic::transport::Error>(&status).is_some() {
        return Error::transport(headers, status);
    }

    let content_type = headers.get("content-type").map(|v| v.as_bytes());
    if content_type.is_some_and(|v| !v.starts_with(b"application/grpc")) {
        return Error::transport(headers, GrpcError::BadContentType(status));
    }

    let gax_status = to_gax_status(&status);
    Error::service_full(gax_status, None, Some(headers), Some(Box::new(status)))
}

#[derive(Debug, thiserror::Error)]
enum GrpcError {
    #[error(
        "unexpected value in content-type header, should start with application/grpc. This usually means the endpoint does not serve the Cloud Functions gRPC API."
    )]
    BadContentType(#[source] tonic::Status),
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;
    use test_case::test_case;

    #[test_case(tonic::Code::Ok, Code::Ok)]
    #[test_case(tonic::Code::Cancelled, Code::Cancelled)]
    #[test_case(tonic::Code::Unknown, Code::Unknown)]
    #[test_case(tonic::Code::InvalidArgument, Code::InvalidArgument)]
    #[test_case(tonic::Code::DeadlineExceeded, Code::DeadlineExceeded)]
    #[test_case(tonic::Code::NotFound, Code::NotFound)]
    #[test_case(tonic::Code::AlreadyExists, Code::AlreadyExists)]
    #[test_case(tonic::Code::PermissionDenied, Code::PermissionDenied)]
    #[test_case(tonic::Code::ResourceExhausted, Code::ResourceExhausted)]
    #[test_case(tonic::Code::FailedPrecondition, Code::FailedPrecondition)]
    #[test_case(tonic::Code::Aborted, Code::Aborted)]
    #[test_case(tonic::Code::OutOfRange, Code::OutOfRange)]
    #[test_case(tonic::Code::Unimplemented, Code::Unimplemented)]
    #[test_case(tonic::Code::Internal, Code::Internal)]
    #[test_case(tonic::Code::Unavailable, Code::Unavailable)]
    #[test_case(tonic::Code::DataLoss, Code::DataLoss)]
    #[test_case(tonic::Code::Unauthenticated, Code::Unauthenticated)]
    fn check_code(input: tonic::Code, want: Code) {
        let got = to_gax_status(&tonic::Status::new(input, "test-only"));
        assert_eq!(got.code, want);
        assert_eq!(&got.message, "test-only");
    }

    #[test]
    fn service_error() {
        let mut input = tonic::Status::not_found("function not found");
        input.metadata_mut().append(
            "content-type",
            tonic::metadata::AsciiMetadataValue::from_static("application/grpc"),
        );
        let got = to_gax_error(input);
        let status = got.status().cloned().unwrap_or_default();
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(&status.message, "function not found");
        let content_type = got
            .http_headers()
            .and_then(|h| h.get("content-type"))
            .and_then(|v| v.to_str().ok());
        assert_eq!(content_type, Some("application/grpc"));
        assert!(rpc_status(&got).is_none(), "{got:?}");
    }

    #[test]
    fn service_error_with_details() -> anyhow::Result<()> {
        let any = prost_types::Any {
            type_url: "type.googleapis.com/google.rpc.ErrorInfo".into(),
            value: vec![0x0a, 0x06, b'r', b'e', b'a', b's', b'o', b'n'],
        };
        let details = common::rpc::Status {
            code: tonic::Code::FailedPrecondition as i32,
            message: "test-only".into(),
            details: vec![any.clone()],
        }
        .encode_to_vec();

        let input = tonic::Status::with_details(
            tonic::Code::FailedPrecondition,
            "test-only",
            details.into(),
        );
        let got = to_gax_error(input);
        let status = got.status().cloned().unwrap_or_default();
        assert_eq!(status.code, Code::FailedPrecondition);
        let detailed = rpc_status(&got).ok_or_else(|| anyhow::anyhow!("missing details"))?;
        assert_eq!(detailed.details, vec![any]);
        assert_eq!(detailed.code, tonic::Code::FailedPrecondition as i32);
        Ok(())
    }

    #[test]
    fn bad_content_type() {
        let mut status = tonic::Status::internal("oh noes");
        status.metadata_mut().append(
            "content-type",
            tonic::metadata::AsciiMetadataValue::from_static("text/html; charset=UTF-8"),
        );
        let got = to_gax_error(status);
        assert!(got.is_transport(), "{got:?}");
        assert!(got.status().is_none(), "{got:?}");
        let source = got.source().and_then(|e| e.downcast_ref::<GrpcError>());
        assert!(
            matches!(source, Some(GrpcError::BadContentType(_))),
            "{got:?}"
        );
        let fmt = source.map(|s| s.to_string()).unwrap_or_default();
        assert!(fmt.contains("application/grpc"), "{fmt}");
    }
}
