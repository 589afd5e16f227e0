use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{StatusCode, Url};

use crate::error::{Error, Result};
use crate::hub::config::{Config, RepoType};
use crate::hub::repo_info::RepoInfo;
use crate::lister::MetadataSource;

const ERROR_CODE: &str = "x-error-code";

#[derive(Debug, Clone)]
pub struct HubClient {
    client: Client,
    endpoint: Url,
    revision: Option<String>,
    files_metadata: bool,
}

impl HubClient {
    pub fn new(config: &Config) -> Result<HubClient> {
        let endpoint = Url::parse(config.endpoint.trim())
            .map_err(|e| Error::Config(format!("invalid endpoint `{}`: {}", config.endpoint, e)))?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "invalid endpoint `{}`: not a base url",
                config.endpoint
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("hf-lister/", env!("CARGO_PKG_VERSION"))),
        );
        let client = Client::builder().default_headers(headers).build()?;

        Ok(HubClient {
            client,
            endpoint,
            revision: config.revision.clone(),
            files_metadata: config.files_metadata,
        })
    }

    /// `{endpoint}/api/{type}s/{repo_id}[/revision/{rev}][?blobs=true]`
    pub fn repo_info_url(&self, repo_id: &str, repo_type: RepoType) -> Url {
        let mut url = self.endpoint.clone();
        {
            // checked in `new`
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.pop_if_empty();
                segments.push("api").push(repo_type.api_segment());
                segments.extend(repo_id.split('/'));
                if let Some(rev) = &self.revision {
                    segments.push("revision").push(rev);
                }
            }
        }
        url.set_query(None);
        if self.files_metadata {
            url.query_pairs_mut().append_pair("blobs", "true");
        }
        url
    }

    pub fn repo_info(&self, repo_id: &str, repo_type: RepoType) -> Result<RepoInfo> {
        let url = self.repo_info_url(repo_id, repo_type);
        tracing::debug!("GET {}", url);

        let res = self.client.get(url).send()?;
        let status = res.status();
        if !status.is_success() {
            let code = res
                .headers()
                .get(ERROR_CODE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_owned();
            return Err(self.status_error(repo_id, status, &code));
        }

        let body = res.bytes()?;
        let info: RepoInfo = serde_json::from_slice(&body)?;
        tracing::info!(
            "load repo info: {} {} (sha: {}, files: {})",
            repo_type,
            info.id.as_deref().unwrap_or(repo_id),
            info.sha.as_deref().unwrap_or("-"),
            info.siblings.len()
        );
        Ok(info)
    }

    fn status_error(&self, repo_id: &str, status: StatusCode, code: &str) -> Error {
        match (status, code) {
            (_, "RevisionNotFound") => Error::NotFound(format!(
                "{}@{}",
                repo_id,
                self.revision.as_deref().unwrap_or("main")
            )),
            // the hub answers 401 for unknown repos when the caller is anonymous
            (_, "RepoNotFound") | (StatusCode::NOT_FOUND, _) => Error::NotFound(repo_id.to_owned()),
            (StatusCode::UNAUTHORIZED, _) | (StatusCode::FORBIDDEN, _) => {
                Error::Unauthorized(repo_id.to_owned())
            }
            _ => Error::Status {
                repo: repo_id.to_owned(),
                status,
            },
        }
    }
}

impl MetadataSource for HubClient {
    fn repo_info(&self, repo_id: &str, repo_type: RepoType) -> Result<RepoInfo> {
        HubClient::repo_info(self, repo_id, repo_type)
    }
}
