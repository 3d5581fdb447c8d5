//! Branch-name and gh-output conventions.

use std::collections::BTreeSet;

/// Prefix of every topic branch created by `ops start`.
pub const TOPIC_PREFIX: &str = "topic/feat-";

/// Replaces every character outside `[a-zA-Z0-9]` with `-` and lowercases.
pub fn slugify(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// `topic/feat-<issue>-<slug>`
pub fn topic_branch(issue_id: u64, title: &str) -> String {
    format!("{TOPIC_PREFIX}{issue_id}-{}", slugify(title))
}

/// The digits following the first `feat-` that is followed by a digit.
pub fn issue_id_from_branch(branch: &str) -> Option<u64> {
    branch.match_indices("feat-").find_map(|(idx, marker)| {
        let rest = &branch[idx + marker.len()..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        rest[..end].parse().ok()
    })
}

/// `gh issue create` prints the new issue URL; its last path segment is the number.
pub fn issue_number_from_url(stdout: &str) -> Option<u64> {
    let url = stdout.lines().map(str::trim).filter(|l| !l.is_empty()).last()?;
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

/// Short names of all local and remote-tracking branches in `git branch -a` output.
pub fn parse_branch_list(output: &str) -> BTreeSet<String> {
    output
        .lines()
        .map(|line| line.trim_start_matches(['*', '+']).trim())
        .filter(|line| !line.is_empty() && !line.starts_with('(') && !line.contains(" -> "))
        .map(|name| match name.strip_prefix("remotes/") {
            // remotes/<remote>/<branch>
            Some(remote) => remote.split_once('/').map_or(remote, |(_, b)| b),
            None => name,
        })
        .map(str::to_string)
        .collect()
}
