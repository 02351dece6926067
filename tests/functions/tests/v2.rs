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


#[cfg(test)]
mod v2 {
    use auth::credentials::anonymous::Builder as Anonymous;
    use functions_v2::client::FunctionService;
    use functions_v2::model::*;
    use gax::error::rpc::Code;
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::RequestOptionsBuilder;
    use gax::retry_policy::{Aip194Strict, RetryPolicyExt};
    use integration_tests_functions::v2::{FunctionServiceServer, MockFunctionService};
    use integration_tests_functions::{request_params, start};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    const NAME: &str = "projects/p/locations/us-central1/functions/f";

    async fn client(endpoint: String) -> anyhow::Result<FunctionService> {
        // Show the spans from the tracing decorator in failed tests.
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let client = FunctionService::builder()
            .with_endpoint(endpoint)
            .with_credentials(Anonymous::new().build())
            .with_backoff_policy(
                ExponentialBackoffBuilder::new()
                    .with_initial_delay(Duration::from_millis(1))
                    .with_maximum_delay(Duration::from_millis(5))
                    .build()?,
            )
            .with_tracing()
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn list_runtimes() -> anyhow::Result<()> {
        let mut mock = MockFunctionService::new();
        mock.expect_list_runtimes()
            .withf(|r| {
                request_params(r) == Some("parent=projects/p/locations/us-central1")
                    && r.get_ref().filter == "environment=GEN_2"
            })
            .returning(|_| {
                Ok(tonic::Response::new(ListRuntimesResponse {
                    runtimes: vec![list_runtimes_response::Runtime {
                        name: "nodejs22".into(),
                        display_name: "Node.js 22".into(),
                        stage: list_runtimes_response::RuntimeStage::Ga as i32,
                        environment: Environment::Gen2 as i32,
                        warnings: Vec::new(),
                    }],
                }))
            });
        let (endpoint, _server) = start(FunctionServiceServer::new(mock)).await?;
        let client = client(endpoint).await?;

        let response = client
            .list_runtimes()
            .set_parent("projects/p/locations/us-central1")
            .set_filter("environment=GEN_2")
            .send()
            .await?;
        let runtime = &response.runtimes[0];
        assert_eq!(runtime.display_name, "Node.js 22");
        assert_eq!(runtime.environment(), Environment::Gen2);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn update_routes_by_function_name() -> anyhow::Result<()> {
        let mut mock = MockFunctionService::new();
        mock.expect_update_function()
            .withf(|r| request_params(r) == Some(format!("function.name={NAME}").as_str()))
            .returning(|r| {
                let target = r
                    .into_inner()
                    .function
                    .map(|f| f.name)
                    .unwrap_or_default();
                let metadata = OperationMetadata {
                    target,
                    verb: "update".into(),
                    ..Default::default()
                };
                let metadata = prost_types::Any::from_msg(&metadata)
                    .map_err(|e| tonic::Status::internal(e.to_string()))?;
                Ok(tonic::Response::new(Operation {
                    name: "projects/p/locations/us-central1/operations/op-2".into(),
                    metadata: Some(metadata),
                    ..Default::default()
                }))
            });
        let (endpoint, _server) = start(FunctionServiceServer::new(mock)).await?;
        let client = client(endpoint).await?;

        let operation = client
            .update_function()
            .set_function(Function {
                name: NAME.into(),
                ..Default::default()
            })
            .send()
            .await?;
        let metadata = operation
            .metadata
            .as_ref()
            .map(|m| m.to_msg::<OperationMetadata>())
            .transpose()?;
        assert_eq!(metadata.map(|m| m.target), Some(NAME.to_string()));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn delete_returns_finished_operation() -> anyhow::Result<()> {
        let mut mock = MockFunctionService::new();
        mock.expect_delete_function()
            .withf(|r| request_params(r) == Some(format!("name={NAME}").as_str()))
            .returning(|_| {
                Ok(tonic::Response::new(
                    Operation {
                        name: "operations/delete-f".into(),
                        done: true,
                        ..Default::default()
                    }
                    .set_error(common_status(9, "function is in use")),
                ))
            });
        let (endpoint, _server) = start(FunctionServiceServer::new(mock)).await?;
        let client = client(endpoint).await?;

        let operation = client.delete_function().set_name(NAME).send().await?;
        // The operation comes back as the server sent it, the client does not
        // interpret its result.
        assert!(operation.done);
        assert_eq!(operation.error().map(|s| s.code), Some(9));
        Ok(())
    }

    fn common_status(code: i32, message: &str) -> common::rpc::Status {
        common::rpc::Status {
            code,
            message: message.to_string(),
            details: Vec::new(),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn idempotent_rpc_is_retried() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockFunctionService::new();
        mock.expect_get_function()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Err(tonic::Status::unavailable("try-again")));
        mock.expect_get_function()
            .once()
            .in_sequence(&mut seq)
            .returning(|r| {
                Ok(tonic::Response::new(Function {
                    name: r.into_inner().name,
                    ..Default::default()
                }))
            });
        let (endpoint, _server) = start(FunctionServiceServer::new(mock)).await?;
        let client = client(endpoint).await?;

        let function = client
            .get_function()
            .set_name(NAME)
            .with_retry_policy(Aip194Strict.with_attempt_limit(5))
            .send()
            .await?;
        assert_eq!(function.name, NAME);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn non_idempotent_rpc_is_not_retried() -> anyhow::Result<()> {
        let mut mock = MockFunctionService::new();
        mock.expect_create_function()
            .once()
            .returning(|_| Err(tonic::Status::unavailable("try-again")));
        let (endpoint, _server) = start(FunctionServiceServer::new(mock)).await?;
        let client = client(endpoint).await?;

        let err = client
            .create_function()
            .set_parent("projects/p/locations/us-central1")
            .set_function_id("f")
            .with_retry_policy(Aip194Strict.with_attempt_limit(5))
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
        Ok(())
    }

    #[test]
    fn blocking_pagination() -> anyhow::Result<()> {
        // The server needs a runtime, the blocking client creates its own.
        let runtime = tokio::runtime::Runtime::new()?;
        let mut seq = mockall::Sequence::new();
        let mut mock = MockFunctionService::new();
        for (token, next) in [("", "T1"), ("T1", "T2"), ("T2", "")] {
            mock.expect_list_functions()
                .once()
                .in_sequence(&mut seq)
                .withf(move |r| r.get_ref().page_token == token && r.get_ref().page_size == 1)
                .returning(move |_| {
                    Ok(tonic::Response::new(ListFunctionsResponse {
                        functions: vec![Function {
                            name: format!("{NAME}-{next}"),
                            ..Default::default()
                        }],
                        next_page_token: next.to_string(),
                        unreachable: vec!["asia-east1".into()],
                    }))
                });
        }
        let (endpoint, _server) = runtime.block_on(start(FunctionServiceServer::new(mock)))?;

        let client = functions_v2::blocking::FunctionService::builder()
            .with_endpoint(endpoint)
            .with_credentials(Anonymous::new().build())
            .build()?;
        let request = ListFunctionsRequest {
            parent: "projects/p/locations/-".into(),
            page_size: 1,
            ..Default::default()
        };
        let pager = client.list_functions(request, gax::options::RequestOptions::default())?;
        assert_eq!(pager.current_response().unreachable, vec!["asia-east1"]);
        let names = pager
            .items()
            .map(|f| f.map(|f| f.name))
            .collect::<gax::Result<Vec<_>>>()?;
        assert_eq!(
            names,
            vec![
                format!("{NAME}-T1"),
                format!("{NAME}-T2"),
                format!("{NAME}-")
            ]
        );
        Ok(())
    }
}
