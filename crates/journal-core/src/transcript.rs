//! Transcript construction for a single chat exchange.

use crate::turn::ConversationTurn;

/// Build the ordered transcript sent to the completion service.
///
/// A non-empty `prior_turns` is used as-is (it already carries the new user
/// message). Otherwise the transcript is the system prompt followed by the
/// user message. Either way the result holds exactly one system turn and it
/// sits at index 0: a missing one is inserted from `system_prompt`, a
/// misplaced one is moved to the front, and extra ones are dropped.
pub fn build_transcript(
    prior_turns: Vec<ConversationTurn>,
    system_prompt: &str,
    user_message: &str,
) -> Vec<ConversationTurn> {
    if prior_turns.is_empty() {
        return vec![
            ConversationTurn::system(system_prompt),
            ConversationTurn::user(user_message),
        ];
    }

    let mut system = None;
    let mut rest = Vec::with_capacity(prior_turns.len());
    for turn in prior_turns {
        if turn.is_system() {
            if system.is_none() {
                system = Some(turn);
            }
        } else {
            rest.push(turn);
        }
    }

    let mut transcript = Vec::with_capacity(rest.len() + 1);
    transcript.push(system.unwrap_or_else(|| ConversationTurn::system(system_prompt)));
    transcript.extend(rest);
    transcript
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turn::Role;

    fn system_count(transcript: &[ConversationTurn]) -> usize {
        transcript.iter().filter(|t| t.is_system()).count()
    }

    #[test]
    fn test_fresh_conversation() {
        let transcript = build_transcript(Vec::new(), "PROMPT", "How was my week?");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0], ConversationTurn::system("PROMPT"));
        assert_eq!(transcript[1], ConversationTurn::user("How was my week?"));
    }

    #[test]
    fn test_history_without_system_gets_one_prepended() {
        let history = vec![
            ConversationTurn::user("hi"),
            ConversationTurn::assistant("hello"),
            ConversationTurn::user("again"),
        ];
        let transcript = build_transcript(history, "PROMPT", "ignored");

        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[0], ConversationTurn::system("PROMPT"));
        assert_eq!(transcript[1].content, "hi");
        assert_eq!(transcript[3].content, "again");
    }

    #[test]
    fn test_history_with_system_is_not_duplicated() {
        let history = vec![
            ConversationTurn::system("EARLIER PROMPT"),
            ConversationTurn::user("hi"),
        ];
        let transcript = build_transcript(history.clone(), "PROMPT", "hi");

        assert_eq!(transcript, history);
        assert_eq!(system_count(&transcript), 1);
    }

    #[test]
    fn test_misplaced_and_extra_system_turns_normalized() {
        let history = vec![
            ConversationTurn::user("hi"),
            ConversationTurn::system("FIRST"),
            ConversationTurn::assistant("hello"),
            ConversationTurn::system("SECOND"),
        ];
        let transcript = build_transcript(history, "PROMPT", "hi");

        assert_eq!(system_count(&transcript), 1);
        assert_eq!(transcript[0], ConversationTurn::system("FIRST"));
        assert_eq!(transcript[1].role, Role::User);
        assert_eq!(transcript[2].role, Role::Assistant);
    }
}
