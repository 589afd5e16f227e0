use serde::Deserialize;

/// Body of `GET /api/{type}s/{repo_id}`. Only the fields the lister reads.
#[derive(Deserialize, Default, Clone, Debug)]
pub struct RepoInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub siblings: Vec<Sibling>,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Sibling {
    pub rfilename: String,
    #[serde(default)]
    pub size: Option<u64>,
}
