//! End-to-end scenarios for the text pipeline
//!
//! Covers classification, recommendation and markup on realistic Spanish
//! songs, poems and stories, plus the stub backend hand-off.

use serde_json::json;
use verse_voice_core::{
    ContentCategory, Error, MusicStyle, SegmentationStrategy, SpeechSynthesizer, StubSynthesizer,
};
use verse_voice_text_processing::{extract_text, SynthesisOptions, TextPipeline};

const SONG_WITH_REFRAIN: &str = "Bajo la luz de la luna
Cantamos sin parar
Bajo la luz de la luna
La la la la la
El viento nos lleva
Hasta el amanecer";

const RHYMING_POEM: &str = "En el jardín de mis sueños
Florece la esperanza eterna
Donde el alma encuentra paz
Y la vida se hace tierna";

const STORY: &str = "Había una vez un reino lejano donde los pájaros cantaban melodías mágicas.
El rey de ese lugar era conocido por su sabiduría y bondad.
Un día, llegó un viajero que traía noticias del mundo exterior.";

#[test]
fn test_song_with_refrain() {
    let pipeline = TextPipeline::default();
    let processed = pipeline.process(SONG_WITH_REFRAIN).unwrap();
    let analysis = &processed.analysis;

    assert_eq!(analysis.category, ContentCategory::Song);
    assert_eq!(analysis.recommendation.music_style, MusicStyle::Melody);
    assert_eq!(analysis.recommendation.voice, "v2/es_speaker_1");
    assert!(analysis.recommendation.include_music);
    assert_eq!(
        analysis.recommendation.segmentation_strategy,
        SegmentationStrategy::SplitByLines
    );
    assert!(processed.synthesis_text.contains("♪ Bajo la luz de la luna ♪"));
    assert_eq!(
        processed.synthesis_text,
        "♪ Bajo la luz de la luna ♪ ♪ ... ♪ Cantamos sin parar ... ♪ ... \
         ♪ Bajo la luz de la luna ♪ ♪ ... ♪ La la la la la ♪ ... \
         El viento nos lleva ♪ Hasta el amanecer"
    );
}

#[test]
fn test_narrative_opener_verbatim() {
    let pipeline = TextPipeline::default();
    let input = "Había una vez un reino lejano...";
    let processed = pipeline.process(input).unwrap();

    assert_eq!(processed.analysis.category, ContentCategory::Narrative);
    assert!(!processed.analysis.recommendation.include_music);
    assert_eq!(processed.analysis.recommendation.music_style, MusicStyle::Calm);
    assert_eq!(processed.synthesis_text, input);
}

#[test]
fn test_rhyming_poem() {
    let pipeline = TextPipeline::default();
    let processed = pipeline.process(RHYMING_POEM).unwrap();

    assert_eq!(processed.analysis.category, ContentCategory::Poem);
    assert!(processed.analysis.diagnostics.has_rhyme_pattern);
    assert_eq!(processed.analysis.recommendation.voice, "v2/es_speaker_2");
    assert!(processed.synthesis_text.matches(" , ").count() >= 3);
    assert!(!processed.synthesis_text.contains('♪'));
}

#[test]
fn test_empty_input_fails() {
    let pipeline = TextPipeline::default();
    assert_eq!(pipeline.process("").unwrap_err(), Error::EmptyInput);
    assert_eq!(pipeline.process("\n   \n").unwrap_err(), Error::EmptyInput);
}

#[test]
fn test_single_generic_line() {
    let pipeline = TextPipeline::default();
    let processed = pipeline
        .process("   El informe trimestral está listo para revisión  ")
        .unwrap();

    assert_eq!(processed.analysis.category, ContentCategory::Generic);
    assert_eq!(processed.analysis.diagnostics.score, 0);
    assert_eq!(
        processed.synthesis_text,
        "El informe trimestral está listo para revisión"
    );
}

#[test]
fn test_short_identical_lines_are_not_refrains() {
    let pipeline = TextPipeline::default();

    let short = pipeline.analyze("abc\nabc").unwrap();
    assert_eq!(short.diagnostics.features.refrain_count, 0);

    let long_enough = pipeline.analyze("abcd\nabcd").unwrap();
    assert_eq!(long_enough.diagnostics.features.refrain_count, 1);
}

#[test]
fn test_song_preempts_poem() {
    let pipeline = TextPipeline::default();
    let text = format!("{}\nCantando nuestra canción", RHYMING_POEM);
    let analysis = pipeline.analyze(&text).unwrap();

    assert_eq!(analysis.category, ContentCategory::Song);
    assert!(analysis.diagnostics.has_rhyme_pattern);
}

#[test]
fn test_detection_examples() {
    let pipeline = TextPipeline::default();
    let examples = [
        (
            "song with refrain",
            "Bajo la luz de la luna
            Cantando nuestra canción
            Bajo la luz de la luna
            Late fuerte el corazón

            Hey, hey, vamos a bailar
            La noche es para soñar
            Hey, hey, vamos a bailar
            Nunca nos vamos a parar",
            true,
        ),
        ("poem", RHYMING_POEM, false),
        ("story", STORY, false),
        (
            "song with interjections",
            "Oh, oh, oh
            La la la la
            Siento el ritmo en mi corazón
            Na na na na
            Vamos a cantar esta canción",
            true,
        ),
        (
            "rap",
            "Yo soy el rey del rap, no hay quien me pare
            Con mi flow y mi beat, nadie puede competir
            Yo soy el rey del rap, mi música es mi arte
            Hasta el final voy a luchar, nunca me voy a rendir",
            true,
        ),
    ];

    for (name, text, expect_song) in examples {
        let analysis = pipeline.analyze(text).unwrap();
        assert_eq!(
            analysis.category == ContentCategory::Song,
            expect_song,
            "{}: classified as {} ({:?})",
            name,
            analysis.category,
            analysis.diagnostics.notes
        );
    }
}

#[test]
fn test_process_is_deterministic() {
    let pipeline = TextPipeline::default();
    for text in [SONG_WITH_REFRAIN, RHYMING_POEM, STORY] {
        assert_eq!(pipeline.process(text).unwrap(), pipeline.process(text).unwrap());
    }
}

#[test]
fn test_normalization_does_not_change_outcome() {
    let pipeline = TextPipeline::default();
    let messy = SONG_WITH_REFRAIN.replace('\n', "  \r\n\t");
    assert_eq!(
        pipeline.process(&messy).unwrap(),
        pipeline.process(SONG_WITH_REFRAIN).unwrap()
    );
}

#[test]
fn test_shared_pipeline_across_threads() {
    let pipeline = TextPipeline::default();
    let expected = pipeline.process(SONG_WITH_REFRAIN).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| pipeline.process(SONG_WITH_REFRAIN).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_json_payload_round_trip() {
    let pipeline = TextPipeline::default();
    let text = extract_text(&json!({ "text": RHYMING_POEM }));
    let processed = pipeline.process(&text).unwrap();

    let value = serde_json::to_value(&processed).unwrap();
    assert_eq!(value["category"], "poem");
    assert_eq!(value["recommendation"]["music_style"], "background");
    assert_eq!(value["recommendation"]["processing_strategy"], "poem_with_pauses");
    assert!(value["synthesis_text"].is_string());
}

#[tokio::test]
async fn test_plan_feeds_stub_backend() {
    let pipeline = TextPipeline::default();
    let plan = pipeline
        .plan(SONG_WITH_REFRAIN, &SynthesisOptions::default())
        .unwrap();

    assert_eq!(plan.music_style, MusicStyle::Melody);
    assert!(plan.text.starts_with("♪ ♪ Bajo la luz de la luna ♪"));

    let backend = StubSynthesizer::new(8_000);
    let audio = backend.synthesize(&plan.text, &plan.voice).await.unwrap();
    assert_eq!(&audio[0..4], b"RIFF");
}

#[tokio::test]
async fn test_plan_with_unknown_voice_rejected_by_backend() {
    let pipeline = TextPipeline::default();
    let options = SynthesisOptions {
        voice: Some("v2/xx_speaker_0".to_string()),
        ..Default::default()
    };
    let plan = pipeline.plan(RHYMING_POEM, &options).unwrap();
    assert_eq!(plan.text, format!("[music] {}", plan.processed.synthesis_text));

    let backend = StubSynthesizer::default();
    let err = backend.synthesize(&plan.text, &plan.voice).await.unwrap_err();
    let err: Error = err.into();
    assert!(matches!(err, Error::Synthesis(_)));
}
