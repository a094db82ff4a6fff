use crate::git::RepoSnapshot;

pub static INSTRUCTIONS: &str = include_str!("instructions.txt");
pub static USER_PROMPT_TEMPLATE: &str = include_str!("user_prompt.txt");

/// Extract the ticket identifier from a `<type>/<ticket>/<description>` branch
/// name. Any other shape carries no ticket.
pub fn ticket_id(branch: &str) -> Option<&str> {
    let mut parts = branch.split('/');
    let kind = parts.next()?;
    let ticket = parts.next()?;
    let description = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if kind.is_empty() || ticket.is_empty() || description.is_empty() {
        return None;
    }
    Some(ticket)
}

/// Issue-tracker URL for the ticket encoded in `branch`, if any.
pub fn ticket_url(branch: &str, tracker_base_url: &str) -> Option<String> {
    ticket_id(branch).map(|ticket| format!("{}{}", tracker_base_url, ticket))
}

/// Compose the single user-role prompt sent to the model.
///
/// Pure string substitution: the template and the captured git material are
/// embedded into a fixed instruction wrapper. No validation is performed on
/// the template content.
pub fn compose(
    template: &str,
    snapshot: &RepoSnapshot,
    base_branch: &str,
    tracker_base_url: &str,
    hint: Option<&str>,
) -> String {
    let mut prompt = USER_PROMPT_TEMPLATE
        .replace("{{template}}", template)
        .replace("{{status}}", &snapshot.status)
        .replace("{{log}}", &snapshot.log)
        .replace("{{diff}}", &snapshot.diff)
        .replace("{{base_branch}}", base_branch)
        .replace("{{instructions}}", INSTRUCTIONS.trim_end());

    if let Some(ticket) = ticket_id(&snapshot.branch) {
        prompt.push_str(&format!(
            "\nThe changes were made on branch `{}` for ticket {}. \
             Link the ticket in the description: {}{}",
            snapshot.branch, ticket, tracker_base_url, ticket
        ));
    }

    if let Some(hint) = hint {
        prompt.push_str(&format!("\n\nAdditional context: {}", hint));
    }

    prompt
}
