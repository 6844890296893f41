//! Integration tests for the full abstract-formatting pipeline

use absfmt::{diagnostic_ids as ids, format_abstract, FormatOptions, Formatter, Lexicon, Severity};

// ============================================================================
// End-to-end cleaning
// ============================================================================

mod cleaning {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn latex_flavored_abstract_comes_out_as_html() {
        let input = "Abstract--We study \\textbf{bug reports} in $2^10$ projects % sample\n\
                     covering state-\nand event-based systems, a ``large'' corpus---believe it.";
        let outcome = format_abstract(input);
        assert_eq!(
            outcome.html,
            "We study bug reports in 2^10 projects covering state- and event-based \
             systems, a &ldquo;large&rdquo; corpus&mdash;believe it."
        );
        assert!(outcome.diagnostics.contains(ids::ABSTRACT_PREFIX));
        assert!(outcome.diagnostics.contains(ids::COMMENTED_LINES));
        assert!(outcome.diagnostics.contains(ids::TEX_SYNTAX));
    }

    #[test]
    fn angle_brackets_are_escaped_before_tags_appear() {
        let outcome = format_abstract("We show a < b and b > c here.");
        assert_eq!(outcome.html, "We show a &lt; b and b &gt; c here.");
    }

    #[test]
    fn forced_breaks_become_br_tags() {
        let outcome = format_abstract("first part\\\\second part");
        assert_eq!(outcome.html, "first part<br />second part");
        assert!(outcome.diagnostics.contains(ids::MULTIPLE_PARAGRAPHS));
    }

    #[test]
    fn paragraphs_are_wrapped_unless_flattened() {
        let input = "\n\nParagraph\n\nbla";
        let outcome = Formatter::new(FormatOptions {
            flatten_paragraphs: false,
        })
        .format(input);
        assert_eq!(outcome.html, "<p>Paragraph</p>bla");

        let outcome = Formatter::new(FormatOptions {
            flatten_paragraphs: true,
        })
        .format(input);
        assert_eq!(outcome.html, "Paragraph bla");
    }

    #[test]
    fn abstract_marker_in_its_own_paragraph_is_removed_cleanly() {
        let outcome = format_abstract("Abstract\n\nWe present a study of eleven systems here today.");
        assert_eq!(outcome.html, "We present a study of eleven systems here today.");
        assert!(outcome.diagnostics.contains(ids::ABSTRACT_PREFIX));
    }

    #[test]
    fn ligatures_are_expanded() {
        let outcome = format_abstract("tra\u{FB03}c \u{FB02}ow");
        assert_eq!(outcome.html, "traffic flow");
    }
}

// ============================================================================
// Idempotence
// ============================================================================

mod idempotence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn second_run_changes_nothing_for_clean_text() {
        let clean = "We present a careful replication of eleven earlier studies and discuss \
                     what failed to replicate.";
        let first = format_abstract(clean);
        let second = format_abstract(&first.html);
        assert_eq!(second.html, first.html);
        assert_eq!(second.word_count, first.word_count);
    }

    #[test]
    fn second_run_is_stable_after_entity_rewrites() {
        let first = format_abstract("A ``quoted'' claim---with an em-dash and a dash--pair.");
        let second = format_abstract(&first.html);
        assert_eq!(second.html, first.html);
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

mod diagnostics {
    use super::*;
    use pretty_assertions::assert_eq;

    fn long_text(words: usize) -> String {
        let mut text = vec!["word"; words].join(" ");
        text.push('.');
        text
    }

    #[test]
    fn toy_input_is_not_judged() {
        let outcome = format_abstract("too short");
        assert!(!outcome.diagnostics.contains(ids::LENGTH));
        assert!(!outcome.diagnostics.contains(ids::PARAGRAPH_END));
    }

    #[test]
    fn short_abstract_warns() {
        let outcome = format_abstract(&long_text(50));
        let diag = outcome.diagnostics.get(ids::LENGTH).unwrap();
        assert_eq!(diag.severity, Severity::Warning);
        assert!(diag.message.contains("fewer than 100 words"));
    }

    #[test]
    fn normal_length_is_quiet() {
        let outcome = format_abstract(&long_text(150));
        assert!(!outcome.diagnostics.contains(ids::LENGTH));
    }

    #[test]
    fn overlong_abstract_escalates() {
        let outcome = format_abstract(&long_text(300));
        assert_eq!(
            outcome.diagnostics.get(ids::LENGTH).unwrap().severity,
            Severity::Danger
        );
        let outcome = format_abstract(&long_text(600));
        assert!(outcome
            .diagnostics
            .get(ids::LENGTH)
            .unwrap()
            .message
            .contains("exceeds 500 words"));
    }

    #[test]
    fn missing_terminal_punctuation_is_danger() {
        let outcome =
            format_abstract("This abstract has more than ten words but no proper ending at all");
        assert_eq!(
            outcome.diagnostics.get(ids::PARAGRAPH_END).unwrap().severity,
            Severity::Danger
        );
    }

    #[test]
    fn references_are_flagged() {
        let outcome = format_abstract(
            "As shown earlier [32, 33, 31], the results replicate across all sites we visited.",
        );
        assert!(outcome.diagnostics.contains(ids::REFERENCES));

        let outcome = format_abstract(
            "A bracketed aside [like this one] is fine and does not count as a citation here.",
        );
        assert!(!outcome.diagnostics.contains(ids::REFERENCES));
    }

    #[test]
    fn complex_math_is_danger() {
        let outcome = format_abstract(
            "We rely on $\\leftarrow$ arrows even though nobody asked for them at all here.",
        );
        assert_eq!(
            outcome.diagnostics.get(ids::TEX_MATH).unwrap().severity,
            Severity::Danger
        );
    }

    #[test]
    fn trivial_math_is_inlined_silently() {
        let outcome = format_abstract(
            "Our benchmark shows that $5+5-2=8$ holds in every configuration we measured there.",
        );
        assert!(outcome.html.contains("5+5-2=8"));
        assert!(!outcome.html.contains('$'));
        assert!(!outcome.diagnostics.contains(ids::TEX_MATH));
    }

    #[test]
    fn inlined_exponent_is_info() {
        let outcome = format_abstract(
            "We scale the corpus to $2^16$ documents and repeat every measurement ten times over.",
        );
        assert_eq!(
            outcome.diagnostics.get(ids::TEX_MATH).unwrap().severity,
            Severity::Info
        );
    }

    #[test]
    fn stray_question_mark_warns() {
        let outcome = format_abstract(
            "Something went ? wrong in this sentence which otherwise has plenty of words.",
        );
        assert!(outcome.diagnostics.contains(ids::STRAY_QUESTION_MARK));
    }

    #[test]
    fn outcome_serializes_to_json() {
        let outcome = format_abstract("Tiny input % with a comment");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["diagnostics"]["commented-lines"]["severity"], "info");
        assert!(json["html"].is_string());
    }
}

// ============================================================================
// Sentiment
// ============================================================================

mod sentiment {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn neutral_text_scores_zero_not_nan() {
        let outcome = format_abstract("The quick brown fox jumps over the lazy dog again.");
        let sentiment = outcome.sentiment.unwrap();
        assert_eq!(sentiment.score, 0.0);
        assert_eq!(
            outcome.diagnostics.get(ids::SENTIMENT).unwrap().severity,
            Severity::Info
        );
    }

    #[test]
    fn zero_tokens_suppresses_the_diagnostic() {
        let outcome = format_abstract("?!,.");
        assert!(outcome.sentiment.is_none());
        assert!(!outcome.diagnostics.contains(ids::SENTIMENT));
    }

    #[test]
    fn negative_text_escalates() {
        let outcome = format_abstract("Everything failed. Terrible errors. Bad, bad problems.");
        let sentiment = outcome.sentiment.unwrap();
        assert!(sentiment.score < 0.0);
        assert_eq!(
            outcome.diagnostics.get(ids::SENTIMENT).unwrap().severity,
            Severity::Danger
        );
        assert!(sentiment.negative_words.contains("terrible"));
    }

    #[test]
    fn entity_rewrites_do_not_dilute_the_score() {
        let outcome = format_abstract("A ``good'' result");
        assert_eq!(outcome.html, "A &ldquo;good&rdquo; result");
        assert_eq!(outcome.sentiment.unwrap().score, 1.0);
    }

    #[test]
    fn custom_lexicon_is_honored() {
        let lexicon = Lexicon::from_entries([("replication", 5)]);
        let formatter = Formatter::with_lexicon(FormatOptions::default(), lexicon);
        let outcome = formatter.format("A replication study.");
        let sentiment = outcome.sentiment.unwrap();
        assert!(sentiment.score > 0.0);
        assert!(sentiment.positive_words.contains("replication"));
    }
}
