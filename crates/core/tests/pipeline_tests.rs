//! Tests d'intégration: génération, export FASTA et statistiques

use adnseq_core::{
    generate, run_pipeline, run_pipeline_with_rng, write_fasta, PipelineConfig, PipelineInput,
    SeqError, SequenceStats,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn config_in(dir: &std::path::Path, seed: u64) -> PipelineConfig {
    PipelineConfig {
        output_dir: dir.to_path_buf(),
        seed: Some(seed),
    }
}

#[test]
fn test_end_to_end_small_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let input = PipelineInput {
        length: 8,
        sequence_id: "seq1".to_string(),
        description: "test".to_string(),
        name: "X".to_string(),
    };

    let report = run_pipeline(&input, &config_in(dir.path(), 2024)).unwrap();

    let content = std::fs::read_to_string(dir.path().join("seq1.fasta")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], ">seq1 test");
    assert_eq!(lines[1].chars().count(), 9);
    assert_eq!(lines[1].matches('X').count(), 1);
    assert_eq!(lines[1].chars().filter(|c| "ACGT".contains(*c)).count(), 8);
    assert!(content.ends_with('\n'));

    // Statistiques calculées sur les 8 nucléotides seulement
    assert_eq!(report.generated.raw.len(), 8);
    let counts = report.stats.counts();
    assert_eq!(counts.a + counts.c + counts.g + counts.t, 8);
    let sum = report.stats.pct_a + report.stats.pct_c + report.stats.pct_g + report.stats.pct_t;
    assert!((sum - 100.0).abs() < 0.01);
}

#[test]
fn test_file_matches_generated_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let input = PipelineInput {
        length: 250,
        sequence_id: "long".to_string(),
        description: "opis z spacjami".to_string(),
        name: "Małgorzata".to_string(),
    };

    let report = run_pipeline(&input, &config_in(dir.path(), 9)).unwrap();

    let content = std::fs::read_to_string(&report.path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some(">long opis z spacjami"));
    let body: Vec<&str> = lines.collect();
    assert!(body.iter().all(|l| l.chars().count() <= 60));
    assert_eq!(body.concat(), report.generated.annotated);
}

#[test]
fn test_same_seed_same_output() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let input = PipelineInput {
        length: 120,
        sequence_id: "s".to_string(),
        description: "d".to_string(),
        name: "Ewa".to_string(),
    };

    let a = run_pipeline(&input, &config_in(dir_a.path(), 77)).unwrap();
    let b = run_pipeline(&input, &config_in(dir_b.path(), 77)).unwrap();

    assert_eq!(a.generated, b.generated);
    assert_eq!(
        std::fs::read(&a.path).unwrap(),
        std::fs::read(&b.path).unwrap()
    );
}

#[test]
fn test_existing_file_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("old.fasta");
    std::fs::write(&path, "stale content that is much longer than the new record\n".repeat(10)).unwrap();

    write_fasta(&path, "old", "new", "ACGT").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), ">old new\nACGT\n");
}

#[test]
fn test_injected_rng_drives_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let input = PipelineInput {
        length: 30,
        sequence_id: "inj".to_string(),
        description: String::new(),
        name: String::new(),
    };
    let config = PipelineConfig {
        output_dir: dir.path().to_path_buf(),
        seed: None,
    };

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let report = run_pipeline_with_rng(&mut rng, &input, &config).unwrap();
    let expected = generate(&mut ChaCha8Rng::seed_from_u64(5), 30, "").unwrap();

    assert_eq!(report.generated, expected);
    // Nom vide: séquence annotée identique à la séquence brute
    assert_eq!(report.generated.annotated, report.generated.raw);
}

#[test]
fn test_invalid_file_name_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = PipelineInput {
        length: 10,
        sequence_id: "sub/dir".to_string(),
        description: "d".to_string(),
        name: "N".to_string(),
    };

    let err = run_pipeline(&input, &config_in(dir.path(), 3)).unwrap_err();
    assert!(matches!(err, SeqError::Io { .. }));
    assert!(err.to_string().contains("dir.fasta"));
}

#[test]
fn test_stats_on_empty_sequence_fails() {
    assert!(matches!(SequenceStats::compute(""), Err(SeqError::EmptySequence)));
}
