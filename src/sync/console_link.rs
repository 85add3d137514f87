// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Console shortcut link reconciliation

use crate::configuration::types::Config;
use crate::error::Result;
use crate::kubernetes::openshift::{
    ConsoleLink, ConsoleLinkSpec, NamespaceDashboardSpec, NAMESPACE_DASHBOARD,
};
use crate::types::syndesis::Syndesis;
use kube::api::{DeleteParams, ObjectMeta, PostParams};
use kube::{Api, Client, ResourceExt};
use tracing::{debug, error, info, instrument};

/// Keep the console link pointing at the resolved route hostname. Does
/// nothing when no hostname is known yet or the cluster does not serve
/// console links. Creation, update and deletion are all idempotent; only a
/// drifted link is written back.
#[instrument(skip_all, fields(syndesis = %syndesis.name_any()))]
pub async fn set_console_link(
    config: &Config,
    client: &Client,
    syndesis: &Syndesis,
    route_host: &str,
) -> Result<()> {
    if route_host.is_empty() {
        return Ok(());
    }

    if !config.api_server.console_link {
        debug!("Cluster does not support the ConsoleLink API");
        return Ok(());
    }

    let name = console_link_name(syndesis);
    let links: Api<ConsoleLink> = Api::all(client.clone());

    match links.get(&name).await {
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!("Creating console link {}", name);
            let link = namespace_dashboard_link(&name, route_host, syndesis);
            links.create(&PostParams::default(), &link).await?;
            Ok(())
        }
        Err(e) => Err(e.into()),
        Ok(link) => {
            if syndesis.is_being_deleted() {
                // Best effort: the owning resource is already going away
                info!("Deleting console link {}", name);
                if let Err(e) = links.delete(&name, &DeleteParams::default()).await {
                    error!("Error deleting console link {}: {}", name, e);
                }
                return Ok(());
            }

            reconcile_console_link(&links, link, route_host, syndesis).await
        }
    }
}

/// Write the link back only when its target or text drifted
async fn reconcile_console_link(
    links: &Api<ConsoleLink>,
    mut link: ConsoleLink,
    route_host: &str,
    syndesis: &Syndesis,
) -> Result<()> {
    let href = format!("https://{}", route_host);
    let text = syndesis.name_any();

    let mut changed = false;
    if link.spec.href != href {
        link.spec.href = href;
        changed = true;
    }
    if link.spec.text != text {
        link.spec.text = text;
        changed = true;
    }

    if changed {
        let name = link.name_any();
        info!("Updating console link {}", name);
        links.replace(&name, &PostParams::default(), &link).await?;
    }

    Ok(())
}

fn console_link_name(syndesis: &Syndesis) -> String {
    format!(
        "{}-{}",
        syndesis.name_any(),
        syndesis.namespace().unwrap_or_default()
    )
}

fn namespace_dashboard_link(name: &str, route_host: &str, syndesis: &Syndesis) -> ConsoleLink {
    ConsoleLink {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            labels: syndesis.metadata.labels.clone(),
            ..Default::default()
        },
        spec: ConsoleLinkSpec {
            text: syndesis.name_any(),
            href: format!("https://{}", route_host),
            location: Some(NAMESPACE_DASHBOARD.to_string()),
            namespace_dashboard: Some(NamespaceDashboardSpec {
                namespaces: vec![syndesis.namespace().unwrap_or_default()],
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{console_link_json, not_found_json, status_json, MockService};
    use crate::types::syndesis::SyndesisSpec;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;

    fn make_syndesis(name: &str, namespace: &str) -> Syndesis {
        let mut syndesis = Syndesis::new(name, SyndesisSpec::default());
        syndesis.metadata.namespace = Some(namespace.to_string());
        syndesis
    }

    fn make_config(console_link: bool) -> Config {
        let mut config = Config::default();
        config.api_server.console_link = console_link;
        config
    }

    #[tokio::test]
    async fn test_noop_without_route_hostname() {
        let service = MockService::new();
        let client = service.clone().into_client();
        let config = make_config(true);
        let syndesis = make_syndesis("app", "syndesis");

        set_console_link(&config, &client, &syndesis, "").await.unwrap();

        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_noop_without_console_link_capability() {
        let service = MockService::new();
        let client = service.clone().into_client();
        let config = make_config(false);
        let syndesis = make_syndesis("app", "syndesis");

        set_console_link(&config, &client, &syndesis, "app.example.com")
            .await
            .unwrap();

        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_absent_link_is_created() {
        let service = MockService::new()
            .on_get(
                "/apis/console.openshift.io/v1/consolelinks/app-syndesis",
                404,
                &not_found_json("consolelinks", "app-syndesis"),
            )
            .on_post(
                "/apis/console.openshift.io/v1/consolelinks",
                201,
                &console_link_json("app-syndesis", "app", "https://app.example.com"),
            );
        let client = service.clone().into_client();
        let config = make_config(true);
        let syndesis = make_syndesis("app", "syndesis");

        set_console_link(&config, &client, &syndesis, "app.example.com")
            .await
            .unwrap();

        let posts: Vec<_> = service
            .calls()
            .into_iter()
            .filter(|(method, _)| method == "POST")
            .collect();
        assert_eq!(posts.len(), 1);
    }

    #[tokio::test]
    async fn test_matching_link_is_left_alone() {
        let service = MockService::new().on_get(
            "/apis/console.openshift.io/v1/consolelinks/app-syndesis",
            200,
            &console_link_json("app-syndesis", "app", "https://app.example.com"),
        );
        let client = service.clone().into_client();
        let config = make_config(true);
        let syndesis = make_syndesis("app", "syndesis");

        // run twice: neither call may issue a write
        set_console_link(&config, &client, &syndesis, "app.example.com")
            .await
            .unwrap();
        set_console_link(&config, &client, &syndesis, "app.example.com")
            .await
            .unwrap();

        assert!(service
            .calls()
            .iter()
            .all(|(method, _)| method == "GET"));
    }

    #[tokio::test]
    async fn test_drifted_link_is_updated() {
        let service = MockService::new()
            .on_get(
                "/apis/console.openshift.io/v1/consolelinks/app-syndesis",
                200,
                &console_link_json("app-syndesis", "app", "https://old.example.com"),
            )
            .on_put(
                "/apis/console.openshift.io/v1/consolelinks/app-syndesis",
                200,
                &console_link_json("app-syndesis", "app", "https://app.example.com"),
            );
        let client = service.clone().into_client();
        let config = make_config(true);
        let syndesis = make_syndesis("app", "syndesis");

        set_console_link(&config, &client, &syndesis, "app.example.com")
            .await
            .unwrap();

        let puts: Vec<_> = service
            .calls()
            .into_iter()
            .filter(|(method, _)| method == "PUT")
            .collect();
        assert_eq!(puts.len(), 1);
    }

    #[tokio::test]
    async fn test_deleting_resource_removes_link() {
        let service = MockService::new()
            .on_get(
                "/apis/console.openshift.io/v1/consolelinks/app-syndesis",
                200,
                &console_link_json("app-syndesis", "app", "https://app.example.com"),
            )
            .on_delete(
                "/apis/console.openshift.io/v1/consolelinks/app-syndesis",
                200,
                &status_json(),
            );
        let client = service.clone().into_client();
        let config = make_config(true);
        let mut syndesis = make_syndesis("app", "syndesis");
        syndesis.metadata.deletion_timestamp = Some(Time(k8s_openapi::chrono::Utc::now()));

        set_console_link(&config, &client, &syndesis, "app.example.com")
            .await
            .unwrap();

        let deletes: Vec<_> = service
            .calls()
            .into_iter()
            .filter(|(method, _)| method == "DELETE")
            .collect();
        assert_eq!(deletes.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_failure_is_swallowed() {
        let service = MockService::new().on_get(
            "/apis/console.openshift.io/v1/consolelinks/app-syndesis",
            200,
            &console_link_json("app-syndesis", "app", "https://app.example.com"),
        );
        // no DELETE registered: the call hits the default 404
        let client = service.clone().into_client();
        let config = make_config(true);
        let mut syndesis = make_syndesis("app", "syndesis");
        syndesis.metadata.deletion_timestamp = Some(Time(k8s_openapi::chrono::Utc::now()));

        set_console_link(&config, &client, &syndesis, "app.example.com")
            .await
            .unwrap();
    }
}
