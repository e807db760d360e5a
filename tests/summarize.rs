use rapid_summarizer::pipeline::observer::StageTimingObserver;
use rapid_summarizer::pipeline::traits::StaticKeywords;
use rapid_summarizer::{
    summarize, summarize_sentences, DefaultSummaryPipeline, NoopObserver, PipelineBuilder,
    SummarizeError, SummaryConfig, SummarySpec,
};

fn four_sentences() -> (Vec<&'static str>, Vec<&'static str>) {
    (
        vec![
            "The report opens here.",
            "  Weather was mild.  ",
            "Alpha and Beta were both observed.",
            "Nothing else happened.",
        ],
        vec![
            "the report opens here.",
            "weather was mild.",
            "alpha and beta were both observed.",
            "nothing else happened.",
        ],
    )
}

#[test]
fn test_top_sentence_joins_forced_first_sentence() {
    let (original, processed) = four_sentences();
    let pipeline = PipelineBuilder::new().include_scores(true).build();
    let document = rapid_summarizer::Document::from_views(original, processed).unwrap();
    let table = rapid_summarizer::KeywordTable::new([("alpha", 0.01), ("beta", 0.5)]).unwrap();

    let summary = pipeline
        .summarize_document(&document, &table, &mut NoopObserver)
        .unwrap();

    let scores = summary.scores.as_ref().unwrap();
    assert!(scores.get(2).unwrap() > 0.0);
    for i in [0, 1, 3] {
        assert_eq!(scores.get(i), Some(0.0));
    }
    assert_eq!(summary.selection.indices(), &[0, 2]);
    assert_eq!(
        summary.sentences,
        vec!["The report opens here.", "Alpha and Beta were both observed."]
    );
}

#[test]
fn test_single_sentence_document_returned_verbatim() {
    let summary = summarize_sentences(
        vec!["Just one sentence."],
        vec!["just one sentence."],
        [("sentence", 0.2)],
        0.25,
    )
    .unwrap();

    assert_eq!(summary.selection.indices(), &[0]);
    assert_eq!(summary.sentences, vec!["Just one sentence."]);
}

#[test]
fn test_zero_sentences_is_empty_document() {
    let err = summarize_sentences(
        Vec::<String>::new(),
        Vec::<String>::new(),
        [("alpha", 0.1)],
        0.25,
    )
    .unwrap_err();
    assert!(matches!(err, SummarizeError::EmptyDocument));
}

#[test]
fn test_zero_fraction_is_invalid_parameter() {
    let (original, processed) = four_sentences();
    let err = summarize_sentences(original, processed, [("alpha", 0.1)], 0.0).unwrap_err();
    assert!(matches!(err, SummarizeError::InvalidParameter { .. }));
}

#[test]
fn test_zero_fraction_reported_even_for_empty_input() {
    let err = summarize_sentences(
        Vec::<String>::new(),
        Vec::<String>::new(),
        Vec::<(String, f64)>::new(),
        0.0,
    )
    .unwrap_err();
    assert!(matches!(err, SummarizeError::InvalidParameter { .. }));
}

#[test]
fn test_all_zero_importances_fall_back_to_index_order() {
    let (original, processed) = four_sentences();
    let pipeline = PipelineBuilder::new()
        .summary_fraction(0.5)
        .include_scores(true)
        .build();
    let document = rapid_summarizer::Document::from_views(original, processed).unwrap();
    let table = rapid_summarizer::KeywordTable::new([("alpha", 0.0), ("weather", 0.0)]).unwrap();

    let summary = pipeline
        .summarize_document(&document, &table, &mut NoopObserver)
        .unwrap();

    assert!(summary
        .scores
        .as_ref()
        .unwrap()
        .iter()
        .all(|(_, s)| s == 0.0));
    assert_eq!(summary.selection.indices(), &[0, 1]);
}

#[test]
fn test_empty_processed_sentence_scores_zero_and_stays_selectable() {
    let original = vec!["Intro.", "(figure)", "Alpha shows up.", "Closing words."];
    let processed = vec!["intro.", "   ", "alpha shows up.", "closing words."];

    let pipeline = PipelineBuilder::new()
        .summary_fraction(0.75)
        .include_scores(true)
        .build();
    let document =
        rapid_summarizer::Document::from_views(original.clone(), processed.clone()).unwrap();
    let table = rapid_summarizer::KeywordTable::new([("alpha", 0.1)]).unwrap();
    let summary = pipeline
        .summarize_document(&document, &table, &mut NoopObserver)
        .unwrap();

    let scores = summary.scores.as_ref().unwrap();
    assert_eq!(scores.get(1), Some(0.0));
    assert!(scores.get(2).unwrap() > 0.0);
    assert_eq!(summary.selection.indices(), &[0, 1, 2]);
    assert_eq!(summary.sentences[1], "(figure)");

    let plain = summarize_sentences(original, processed, [("alpha", 0.1)], 0.75).unwrap();
    assert_eq!(plain.selection.indices(), &[0, 1, 2]);
    assert!(plain.scores.is_none());
}

#[test]
fn test_misaligned_views() {
    let err = summarize_sentences(
        vec!["One.", "Two."],
        vec!["one."],
        [("one", 0.1)],
        0.25,
    )
    .unwrap_err();
    assert!(matches!(err, SummarizeError::MisalignedInput(_)));
}

#[test]
fn test_selection_properties_hold_across_fractions() {
    let original: Vec<String> = (0..17).map(|i| format!("Sentence number {i}.")).collect();
    let processed: Vec<String> = (0..17)
        .map(|i| {
            let tag = match i % 4 {
                0 => "alpha",
                1 => "beta",
                2 => "alpha beta",
                _ => "plain",
            };
            format!("sentence {tag} number {i}.")
        })
        .collect();
    let keywords = [("alpha", 0.05), ("beta", 0.3)];

    let mut previous = 0;
    for step in 1..=10 {
        let fraction = step as f64 / 10.0;
        let summary =
            summarize_sentences(original.clone(), processed.clone(), keywords, fraction).unwrap();
        let idx = summary.selection.indices();

        assert!(idx.windows(2).all(|w| w[0] < w[1]), "not ascending: {idx:?}");
        assert_eq!(idx[0], 0);
        let target = ((fraction * 17.0).ceil() as usize).clamp(1, 17);
        assert!(idx.len() >= target);
        assert!(idx.len() <= 17);
        assert!(idx.len() >= previous);
        previous = idx.len();

        let again =
            summarize_sentences(original.clone(), processed.clone(), keywords, fraction).unwrap();
        assert_eq!(summary, again);
    }
}

#[test]
fn test_raw_text_summary() {
    let text = "Solar panels convert sunlight into electricity. \
                The weather today is pleasant. \
                Modern solar panels reach high efficiency with new cell designs. \
                Installers recommend solar panels for sunny roofs. \
                My cat sleeps all day.";
    let summary = summarize(text, 0.4).unwrap();

    assert_eq!(summary.sentences[0], "Solar panels convert sunlight into electricity.");
    assert!(!summary.selection.contains(4));
    assert_eq!(summary, summarize(text, 0.4).unwrap());
}

#[test]
fn test_spec_driven_pipeline() {
    let spec = SummarySpec::from_json(
        r#"{ "v": 1, "summary_fraction": 0.5, "include_scores": true, "keywords": { "num_keywords": 5 } }"#,
    )
    .unwrap();
    let config = spec.resolve().unwrap();
    assert_eq!(config.keywords.num_keywords, 5);

    let pipeline = DefaultSummaryPipeline::from_config(config);
    let mut obs = StageTimingObserver::new();
    let summary = pipeline
        .run("First point. Second point. Third point. Fourth point.", &mut obs)
        .unwrap();

    assert!(summary.scores.is_some());
    assert!(summary.len() >= 2);
    assert_eq!(obs.timings().len(), 5);
}

#[test]
fn test_invalid_spec_reports_every_problem() {
    let spec = SummarySpec::from_json(
        r#"{ "v": 1, "summary_fraction": 1.5, "strict": true, "typo": 1 }"#,
    )
    .unwrap();
    match spec.resolve() {
        Err(SummarizeError::InvalidSpec(report)) => assert_eq!(report.errors().count(), 2),
        other => panic!("expected InvalidSpec, got {other:?}"),
    }
}

#[test]
fn test_batch_documents_are_independent() {
    let pipeline = PipelineBuilder::from_config(SummaryConfig::default())
        .extractor(StaticKeywords::new([("beta", 0.1)]))
        .build();
    let texts = [
        "Alpha first. Beta second. Gamma third. Delta fourth.",
        "Beta first. Nothing second.",
    ];
    let results = pipeline.run_batch(&texts);

    assert_eq!(results[0].as_ref().unwrap().selection.indices(), &[0, 1]);
    assert_eq!(results[1].as_ref().unwrap().selection.indices(), &[0]);
}

#[test]
fn test_summary_serializes_to_json() {
    let summary = summarize_sentences(
        vec!["A first.", "B second."],
        vec!["a first.", "b second."],
        [("first", 0.1)],
        0.5,
    )
    .unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["sentences"], serde_json::json!(["A first."]));
    assert_eq!(json["selection"], serde_json::json!([0]));
}
