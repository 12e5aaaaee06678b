use faculty_match::{Document, DocumentSet, RankConfig, Ranker};

fn faculty() -> DocumentSet {
    [
        Document::new(
            "ALVAREZ",
            "Our lab studies cancer cell signaling and tumor metabolism in mouse models.",
        ),
        Document::new(
            "BECKER",
            "Plant genomics, crop domestication and the evolution of flowering time.",
        ),
        Document::new(
            "CHEN",
            "Structural biology of membrane proteins using cryo-electron microscopy.",
        ),
        Document::new("DIALLO", ""),
        Document::new(
            "EVANS",
            "Neuroscience of learning: synaptic plasticity in the hippocampus.",
        ),
    ]
    .into_iter()
    .collect()
}

#[test]
fn scores_are_bounded_and_non_increasing() {
    let ranker = Ranker::default();
    let queries = [
        "cancer signaling in tumors",
        "membrane protein structure",
        "plant evolution and genomics of crops",
        "learning and memory",
        "microscopy of cancer cells and proteins",
    ];
    for query in queries {
        let ranking = ranker.rank(query, &faculty()).unwrap();
        assert_eq!(ranking.count, ranking.results.len());
        for r in &ranking.results {
            assert!((0.0..=1.0).contains(&r.score), "{query}: {r:?}");
            assert!(r.score >= 0.02, "{query}: {r:?}");
        }
        for pair in ranking.results.windows(2) {
            assert!(pair[0].score >= pair[1].score, "{query}: {pair:?}");
        }
    }
}

#[test]
fn best_match_ranks_first() {
    let ranking = Ranker::default()
        .rank("synaptic plasticity and learning", &faculty())
        .unwrap();
    assert_eq!(ranking.results[0].name, "EVANS");
}

#[test]
fn no_documents_no_results() {
    let ranking = Ranker::default()
        .rank("cancer", &DocumentSet::new())
        .unwrap();
    assert!(ranking.results.is_empty());
    assert_eq!(ranking.count, 0);
}

#[test]
fn empty_query_no_results() {
    let ranking = Ranker::default().rank("", &faculty()).unwrap();
    assert!(ranking.results.is_empty());
}

#[test]
fn ranking_is_idempotent() {
    let ranker = Ranker::default();
    let docs = faculty();
    let first = ranker.rank("cancer proteins", &docs).unwrap();
    let second = ranker.rank("cancer proteins", &docs).unwrap();
    assert_eq!(first, second);
}

#[test]
fn earlier_requests_do_not_leak_vocabulary() {
    let ranker = Ranker::default();
    let small: DocumentSet = [Document::new("A", "cancer biology")].into_iter().collect();

    let before = ranker.rank("cancer", &small).unwrap();
    ranker.rank("plant genomics flowering", &faculty()).unwrap();
    let after = ranker.rank("cancer", &small).unwrap();
    assert_eq!(before, after);
}

#[test]
fn identical_text_scores_one() {
    let text = "Molecular mechanisms of DNA repair and genome stability in budding yeast.";
    let docs: DocumentSet = [Document::new("SELF", text)].into_iter().collect();
    let ranking = Ranker::default().rank(text, &docs).unwrap();
    assert_eq!(ranking.results.len(), 1);
    assert!(ranking.results[0].score >= 0.99);
}

#[test]
fn tied_documents_keep_store_order() {
    let docs: DocumentSet = [
        Document::new("SECOND_ALPHABETICALLY_B", "virus evolution"),
        Document::new("A_FIRST", "virus evolution"),
        Document::new("OTHER", "soil chemistry"),
    ]
    .into_iter()
    .collect();
    let ranking = Ranker::default().rank("virus", &docs).unwrap();
    let names: Vec<&str> = ranking.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["SECOND_ALPHABETICALLY_B", "A_FIRST"]);
    assert_eq!(ranking.results[0].score, ranking.results[1].score);
}

#[test]
fn threshold_is_configurable() {
    let docs = faculty();
    let loose = Ranker::new(RankConfig::new(0.0, 3).unwrap())
        .rank("cancer microscopy", &docs)
        .unwrap();
    let strict = Ranker::new(RankConfig::new(0.9, 3).unwrap())
        .rank("cancer microscopy", &docs)
        .unwrap();
    assert!(loose.count >= 2);
    assert_eq!(strict.count, 0);
}
