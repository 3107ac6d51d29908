//! CI backend traits and families, classified from CI marker variables.

use crate::detect::{ci_backend, in_ci, DetectionCache};
use crate::types::{Category, GroupRecord, TraitRecord};

const BACKENDS: &[(&str, &str, &str, &str)] = &[
    ("github-actions", "GitHub Actions", "🐙", "https://github.com/features/actions"),
    ("gitlab-ci", "GitLab CI", "🦊", "https://docs.gitlab.com/ee/ci"),
    ("circleci", "CircleCI", "⭕", "https://circleci.com"),
    ("travis", "Travis CI", "👷", "https://travis-ci.com"),
    ("jenkins", "Jenkins", "🤵", "https://jenkins.io"),
    ("azure-pipelines", "Azure Pipelines", "🔷", "https://azure.microsoft.com/products/devops/pipelines"),
    ("appveyor", "AppVeyor", "🏗", "https://appveyor.com"),
    ("buildkite", "Buildkite", "🪁", "https://buildkite.com"),
    ("teamcity", "TeamCity", "🏙", "https://jetbrains.com/teamcity"),
    ("drone", "Drone", "🛸", "https://drone.io"),
];

pub(super) fn traits() -> Vec<TraitRecord> {
    let mut records: Vec<TraitRecord> = BACKENDS
        .iter()
        .map(|&(id, name, icon, url)| TraitRecord::new(id, name, icon, url, Category::Ci))
        .collect();
    records.push(TraitRecord::new("unknown-ci", "Unknown CI", "❓", "", Category::Ci));
    records
}

pub(super) fn groups() -> Vec<GroupRecord> {
    vec![
        GroupRecord::new(
            "hosted-ci",
            "Hosted CI services",
            "☁",
            true,
            [
                "github-actions",
                "gitlab-ci",
                "circleci",
                "travis",
                "azure-pipelines",
                "appveyor",
                "buildkite",
                "drone",
            ],
        ),
        GroupRecord::new("self-hosted-ci", "Self-hosted CI", "🏠", true, ["jenkins", "teamcity"]),
        GroupRecord::new("other-ci", "Other CI", "❓", true, ["unknown-ci"]),
        GroupRecord::new(
            "any-ci",
            "Any CI",
            "🤖",
            false,
            [
                "github-actions",
                "gitlab-ci",
                "circleci",
                "travis",
                "jenkins",
                "azure-pipelines",
                "appveyor",
                "buildkite",
                "teamcity",
                "drone",
                "unknown-ci",
            ],
        ),
    ]
}

pub(super) fn register_probes(cache: &DetectionCache) {
    for &(id, ..) in BACKENDS {
        cache.register(id, move || Ok(ci_backend() == Some(id)));
    }
    cache.register("unknown-ci", || Ok(in_ci() && ci_backend().is_none()));
}
