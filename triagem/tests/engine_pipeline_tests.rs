//! End-to-end tests for the public engine surface.
//!
//! Tests cover:
//! - Sanitizer contract (empty input, escape tokens, repeated passes)
//! - Tax id validation through the public API
//! - Amount normalization
//! - Lead scoring and intent detection over realistic chat messages
//! - Concurrent use of a shared engine

use rust_decimal::Decimal;
use std::sync::Arc;
use std::thread;
use triagem::prelude::*;
use triagem::sanitizer::{escape_markdown, strip_control_chars};

mod sanitizer_contract {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize_bytes(b""), "");
    }

    #[test]
    fn text_without_backslashes_only_loses_controls_and_gains_escapes() {
        let samples = [
            "Olá, tudo bem?",
            "campo_nome *obrigatório* [ver anexo]",
            "sino\u{7} e nulo\u{0} somem, tab\tfica",
            "linha 1\r\nlinha 2",
            "`código` com crase",
        ];

        for sample in samples {
            assert_eq!(
                sanitize(sample),
                escape_markdown(&strip_control_chars(sample)),
                "sample: {:?}",
                sample
            );
        }
    }

    #[test]
    fn valid_hex_escape_token_is_kept_literally() {
        assert_eq!(sanitize("texto com \\x12 válido"), "texto com \\x12 válido");
    }

    #[test]
    fn invalid_hex_escape_loses_its_backslash() {
        assert_eq!(sanitize("texto com \\xZZ"), "texto com xZZ");
    }

    #[test]
    fn literal_line_breaks_become_real_ones() {
        assert_eq!(sanitize("linha 1\\nlinha 2"), "linha 1\nlinha 2");
        assert_eq!(sanitize("a\\r\\nb"), "a\r\nb");
        assert_eq!(sanitize("col1\\tcol2"), "col1\tcol2");
    }

    #[test]
    fn trailing_backslash_is_preserved() {
        assert_eq!(sanitize("fim\\"), "fim\\");
    }

    #[test]
    fn repeated_passes_can_change_the_output() {
        let once = sanitize("a\\\\nb");
        let twice = sanitize(&once);

        assert_eq!(once, "a\\\nb");
        assert_eq!(twice, "a\nb");
        assert_ne!(once, twice);
    }

    #[test]
    fn markdown_escaping_alone_double_escapes() {
        let once = escape_markdown("*oferta*");
        assert_eq!(once, "\\*oferta\\*");
        assert_eq!(escape_markdown(&once), "\\\\*oferta\\\\*");
    }

    #[test]
    fn invalid_utf8_is_dropped_without_replacement() {
        let bytes = b"pre\xe7o: R$ 10";
        assert_eq!(sanitize_bytes(bytes), "preo: R$ 10");
        assert!(!sanitize_bytes(bytes).contains('\u{FFFD}'));
    }

    #[test]
    fn coerced_values_are_sanitized() {
        assert_eq!(sanitize_debug(&42), "42");
        assert_eq!(sanitize_debug("com_aspas"), "com\\_aspas");
        assert_eq!(sanitize_value(&serde_json::Value::Null), "");
        assert_eq!(sanitize_value(&serde_json::json!("*x*")), "\\*x\\*");
    }

    #[test]
    fn output_has_no_stray_control_characters() {
        let input = "a\u{1}b\u{1b}[31mc\\x07d\u{7f}";
        let output = sanitize(input);

        assert!(
            output
                .chars()
                .all(|c| c as u32 >= 32 || matches!(c, '\n' | '\r' | '\t'))
        );
    }
}

mod validation {
    use super::*;

    #[test]
    fn cpf_rules() {
        assert!(!validate_cpf("11111111111"));
        assert!(validate_cpf("529.982.247-25"));
        assert!(!validate_cpf("529.982.247-2"));
    }

    #[test]
    fn cnpj_rules() {
        assert!(!validate_cnpj("11111111111111"));
        assert!(validate_cnpj("11.222.333/0001-81"));
        assert!(!validate_cnpj("11.222.333/0001-8"));
    }
}

mod extraction {
    use super::*;

    #[test]
    fn amount_is_normalized() {
        let amounts = extract_amounts("R$ 10.000,00");
        assert_eq!(amounts.len(), 1);
        assert_eq!(amounts[0].amount(), Some(Decimal::new(1_000_000, 2)));
        assert_eq!(amounts[0].value.to_string(), "10000.00");
    }

    #[test]
    fn lead_message_yields_every_contact_entity() {
        let message = "Bom dia! Sou da empresa 11.222.333/0001-81, meu CPF é 529.982.247-25. \
                       Contato: juridico@empresa.com.br ou (11) 98765-4321. \
                       Orçamento até R$ 5.000,00, prazo de 30 dias.";

        let entities = extract_all(message);
        let kinds: Vec<_> = entities.iter().map(|e| e.kind).collect();

        assert_eq!(
            kinds,
            vec![
                EntityKind::TaxIdCompany,
                EntityKind::TaxIdPerson,
                EntityKind::Email,
                EntityKind::Phone,
                EntityKind::MonetaryAmount,
                EntityKind::DeadlineMention,
            ]
        );
        assert!(entities.iter().all(|e| e.is_valid()));

        for entity in &entities {
            assert_eq!(&message[entity.start_pos..entity.end_pos], entity.text);
        }
    }

    #[test]
    fn process_number_is_found_once() {
        let text = "Referente ao processo 0001234-56.2023.8.26.0100, favor verificar.";
        assert_eq!(
            extract_process_number(text).as_deref(),
            Some("0001234-56.2023.8.26.0100")
        );

        let entities = extract_all(text);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].kind, EntityKind::ProcessNumber);
    }
}

mod scoring {
    use super::*;

    #[test]
    fn price_then_demo_is_medium() {
        let turns = vec![
            ConversationTurn::new("Qual o preço?"),
            ConversationTurn::new("Preciso agendar uma demo urgente"),
        ];
        let result = score_conversation(&turns);

        assert!(result.score >= 65);
        assert!(matches!(
            result.qualification,
            Qualification::Medium | Qualification::High
        ));
        assert_eq!(result.priority, Priority::Medium);
    }

    #[test]
    fn conversation_from_json() {
        let turns: Vec<ConversationTurn> = serde_json::from_str(
            r#"[
                {"text": "Qual o preço?", "timestamp": "2024-03-10T14:00:00Z"},
                {"text": "Preciso agendar uma demo urgente"}
            ]"#,
        )
        .unwrap();

        assert_eq!(score_conversation(&turns).score, 65);
    }

    #[test]
    fn greeting_is_detected() {
        let intent = detect_intent("oi, bom dia");
        assert_eq!(intent.category, IntentCategory::Greeting);
        assert!(intent.confidence > 0.0);
        assert!(intent.confidence <= 1.0);
    }

    #[test]
    fn empty_conversation_is_low() {
        let result = score_conversation(&[]);
        assert_eq!(result.score, 0);
        assert_eq!(result.qualification, Qualification::Low);
    }
}

mod engine {
    use super::*;

    #[test]
    fn analysis_serializes_for_downstream_routing() {
        let engine = init_engine();
        let analysis = engine.analyze("Quanto custa? Preciso resolver hoje, prazo de 5 dias");
        let json = serde_json::to_value(&analysis).unwrap();

        // "prazo" and "dias" outweigh "quanto custa"
        assert_eq!(json["intent"]["category"], "deadline");
        assert_eq!(json["lead"]["qualification"], "medium");
        assert_eq!(json["lead"]["score"], 55);
        assert_eq!(json["entities"][0]["kind"], "deadline_mention");
        assert_eq!(json["entities"][0]["value"]["type"], "days");
        assert_eq!(json["entities"][0]["value"]["value"], 5);
    }

    #[test]
    fn shared_engine_across_threads() {
        let engine = Arc::new(init_engine());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || {
                    let text = format!("Contato {}: cliente{}@exemplo.com.br", i, i);
                    engine.analyze(&text)
                })
            })
            .collect();

        for handle in handles {
            let analysis = handle.join().unwrap();
            assert_eq!(analysis.entities.len(), 1);
            assert_eq!(analysis.entities[0].kind, EntityKind::Email);
        }
    }

    fn init_engine() -> TriagemEngine {
        triagem::init_with_defaults().unwrap()
    }
}
