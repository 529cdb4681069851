//! New-app submissions, forwarded to the issue tracker as tickets.
//!
//! Submissions are write-only: nothing here ever reads them back, and the
//! catalog only changes when a maintainer edits the source document.

use std::time::Duration;

use serde::Serialize;

use crate::config::TrackerConfig;
use crate::error::SubmitError;

const GITHUB_API: &str = "https://api.github.com";
pub const SUBMISSION_LABEL: &str = "new app submission";

/// The fields a visitor fills in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub category: String,
    pub status: String,
    pub direct_download_link: Option<String>,
    pub store_link: Option<String>,
    pub about: Option<String>,
    pub icon: Option<String>,
}

/// Ticket-creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRequest {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

impl Submission {
    /// Name, category and status are required.
    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.name.trim().is_empty() {
            return Err(SubmitError::MissingField("name"));
        }
        if self.category.trim().is_empty() {
            return Err(SubmitError::MissingField("category"));
        }
        if self.status.trim().is_empty() {
            return Err(SubmitError::MissingField("status"));
        }
        Ok(())
    }

    pub fn to_issue(&self) -> IssueRequest {
        let or_na = |v: &Option<String>| -> String {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or("N/A")
                .to_string()
        };

        let body = format!(
            "A new app has been submitted for the Windows ARM Apps Directory:\n\
             \n\
             - **Name**: {}\n\
             - **Category**: {}\n\
             - **Status**: {}\n\
             - **Direct Download Link**: {}\n\
             - **Store Link**: {}\n\
             - **About**: {}\n\
             - **Icon URL**: {}\n\
             \n\
             Please review this submission and add it to the directory if appropriate.\n",
            self.name.trim(),
            self.category.trim(),
            self.status.trim(),
            or_na(&self.direct_download_link),
            or_na(&self.store_link),
            or_na(&self.about),
            or_na(&self.icon),
        );

        IssueRequest {
            title: format!("New App Submission: {}", self.name.trim()),
            body,
            labels: vec![SUBMISSION_LABEL.to_string()],
        }
    }
}

/// Files submissions as GitHub issues.
pub struct IssueTracker {
    http: reqwest::Client,
    owner: String,
    repo: String,
    token: String,
}

impl IssueTracker {
    pub fn new(config: &TrackerConfig) -> Result<Self, SubmitError> {
        let token = config.token.clone().ok_or(SubmitError::MissingToken)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("armdex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            token,
        })
    }

    pub fn issues_url(&self) -> String {
        format!("{}/repos/{}/{}/issues", GITHUB_API, self.owner, self.repo)
    }

    /// Validate and file a submission. Returns the created issue's URL when
    /// the tracker reports one.
    pub async fn submit(&self, submission: &Submission) -> Result<Option<String>, SubmitError> {
        submission.validate()?;
        let issue = submission.to_issue();

        let resp = self
            .http
            .post(self.issues_url())
            .header(reqwest::header::AUTHORIZATION, format!("token {}", self.token))
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .json(&issue)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message: message.chars().take(200).collect(),
            });
        }

        let created: serde_json::Value = resp.json().await?;
        let url = created
            .get("html_url")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        log::debug!("Created submission issue {:?}", url);
        Ok(url)
    }
}
