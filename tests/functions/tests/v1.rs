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
mod v1 {
    use auth::credentials::anonymous::Builder as Anonymous;
    use functions_v1::client::CloudFunctionsService;
    use functions_v1::model::*;
    use futures::StreamExt;
    use gax::error::rpc::Code;
    use integration_tests_functions::v1::{CloudFunctionsServiceServer, MockCloudFunctionsService};
    use integration_tests_functions::{request_params, start};
    use pretty_assertions::assert_eq;

    const PARENT: &str = "projects/p/locations/-";

    async fn client(endpoint: String) -> anyhow::Result<CloudFunctionsService> {
        let client = CloudFunctionsService::builder()
            .with_endpoint(endpoint)
            .with_credentials(Anonymous::new().build())
            .build()
            .await?;
        Ok(client)
    }

    fn function(id: &str) -> CloudFunction {
        CloudFunction {
            name: format!("projects/p/locations/us-central1/functions/{id}"),
            entry_point: "handler".into(),
            ..Default::default()
        }
    }

    fn page(ids: &[&str], token: &str) -> ListFunctionsResponse {
        ListFunctionsResponse {
            functions: ids.iter().map(|id| function(id)).collect(),
            next_page_token: token.to_string(),
            unreachable: Vec::new(),
        }
    }

    fn three_pages() -> MockCloudFunctionsService {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockCloudFunctionsService::new();
        for (token, next, ids) in [
            ("", "T1", vec!["a", "b"]),
            ("T1", "T2", vec!["c"]),
            ("T2", "", vec![]),
        ] {
            mock.expect_list_functions()
                .once()
                .in_sequence(&mut seq)
                .withf(move |r| {
                    let r = r.get_ref();
                    r.parent == PARENT && r.page_token == token
                })
                .returning(move |_| Ok(tonic::Response::new(page(&ids, next))));
        }
        mock
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn list_all_items() -> anyhow::Result<()> {
        let (endpoint, _server) = start(CloudFunctionsServiceServer::new(three_pages())).await?;
        let client = client(endpoint).await?;

        let mut items = client.list_functions().set_parent(PARENT).by_item().await?;
        let mut names = Vec::new();
        while let Some(f) = items.next().await {
            names.push(f?.name);
        }
        assert_eq!(
            names,
            ["a", "b", "c"]
                .map(|id| function(id).name)
                .to_vec()
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn list_pages() -> anyhow::Result<()> {
        let (endpoint, _server) = start(CloudFunctionsServiceServer::new(three_pages())).await?;
        let client = client(endpoint).await?;

        let mut pager = client.list_functions().set_parent(PARENT).by_page().await?;
        let mut sizes = Vec::new();
        while let Some(page) = pager.next_page().await {
            sizes.push(page?.functions.len());
        }
        // The last page is empty, it is still returned.
        assert_eq!(sizes, vec![2, 1, 0]);
        assert_eq!(pager.current_request().page_token, "T2");
        assert_eq!(pager.current_request().parent, PARENT);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn error_on_second_page() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockCloudFunctionsService::new();
        mock.expect_list_functions()
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Ok(tonic::Response::new(page(&["a", "b"], "T1"))));
        mock.expect_list_functions()
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Err(tonic::Status::permission_denied("no access to us-east1")));
        let (endpoint, _server) = start(CloudFunctionsServiceServer::new(mock)).await?;
        let client = client(endpoint).await?;

        let mut pager = client.list_functions().set_parent(PARENT).by_page().await?;
        let first = pager.next_page().await.transpose()?;
        assert_eq!(first.map(|p| p.functions.len()), Some(2));
        let err = match pager.next_page().await {
            Some(Err(e)) => e,
            r => panic!("expected an error, got {r:?}"),
        };
        assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied));
        // The failed fetch does not replace the current page.
        assert_eq!(pager.current_response().next_page_token, "T1");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn get_sends_routing_header() -> anyhow::Result<()> {
        let name = "projects/p/locations/us-central1/functions/f";
        let mut mock = MockCloudFunctionsService::new();
        mock.expect_get_function()
            .withf(move |r| {
                request_params(r) == Some(format!("name={name}").as_str())
                    && r.get_ref().name == name
            })
            .returning(|r| {
                let name = r.into_inner().name;
                Ok(tonic::Response::new(CloudFunction {
                    name,
                    status: CloudFunctionStatus::Active as i32,
                    ..Default::default()
                }))
            });
        let (endpoint, _server) = start(CloudFunctionsServiceServer::new(mock)).await?;
        let client = client(endpoint).await?;

        let got = client.get_function().set_name(name).send().await?;
        assert_eq!(got.name, name);
        assert_eq!(got.status(), CloudFunctionStatus::Active);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn create_returns_operation() -> anyhow::Result<()> {
        let mut mock = MockCloudFunctionsService::new();
        mock.expect_create_function()
            .withf(|r| {
                request_params(r) == Some("location=projects/p/locations/us-central1")
                    && r.get_ref().function.as_ref().map(|f| f.https_trigger().is_some())
                        == Some(true)
            })
            .returning(|_| {
                let metadata = OperationMetadataV1 {
                    target: "projects/p/locations/us-central1/functions/f".into(),
                    r#type: OperationType::CreateFunction as i32,
                    ..Default::default()
                };
                Ok(tonic::Response::new(Operation {
                    name: "operations/create-f".into(),
                    metadata: Some(prost_types::Any::from_msg(&metadata).map_err(|e| {
                        tonic::Status::internal(format!("cannot encode metadata: {e}"))
                    })?),
                    done: false,
                    result: None,
                }))
            });
        let (endpoint, _server) = start(CloudFunctionsServiceServer::new(mock)).await?;
        let client = client(endpoint).await?;

        let operation = client
            .create_function()
            .set_location("projects/p/locations/us-central1")
            .set_function(function("f").set_https_trigger(HttpsTrigger::default()))
            .send()
            .await?;
        assert_eq!(operation.name, "operations/create-f");
        assert!(!operation.done);
        let metadata = operation
            .metadata
            .as_ref()
            .map(|m| m.to_msg::<OperationMetadataV1>())
            .transpose()?;
        assert_eq!(
            metadata.map(|m| m.r#type()),
            Some(OperationType::CreateFunction)
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn iam_policy() -> anyhow::Result<()> {
        let resource = "projects/p/locations/us-central1/functions/f";
        let mut mock = MockCloudFunctionsService::new();
        mock.expect_get_iam_policy()
            .withf(move |r| {
                request_params(r) == Some(format!("resource={resource}").as_str())
            })
            .returning(|_| {
                Ok(tonic::Response::new(Policy {
                    version: 3,
                    bindings: vec![
                        Binding::new()
                            .set_role("roles/cloudfunctions.invoker")
                            .set_members(["allUsers"]),
                    ],
                    etag: b"etag-1".to_vec(),
                    ..Default::default()
                }))
            });
        let (endpoint, _server) = start(CloudFunctionsServiceServer::new(mock)).await?;
        let client = client(endpoint).await?;

        let policy = client.get_iam_policy().set_resource(resource).send().await?;
        assert_eq!(policy.version, 3);
        assert_eq!(policy.bindings[0].members, vec!["allUsers"]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn unknown_method_is_unimplemented() -> anyhow::Result<()> {
        // The default mock has no expectations, calling it would panic, so
        // send a v2 request to the v1 server instead.
        let (endpoint, _server) =
            start(CloudFunctionsServiceServer::new(MockCloudFunctionsService::new())).await?;
        let client = functions_v2::client::FunctionService::builder()
            .with_endpoint(endpoint)
            .with_credentials(Anonymous::new().build())
            .build()
            .await?;
        let err = client
            .list_runtimes()
            .set_parent("projects/p/locations/l")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unimplemented));
        Ok(())
    }
}
