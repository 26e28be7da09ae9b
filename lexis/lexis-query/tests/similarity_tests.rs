//! Ancestor search, distance and similarity over the fixture taxonomy.

mod common;

use common::{assert_close, diamond, fixture_graph, id, names};
use lexis_core::{RelationKind, SynsetName};
use lexis_graph::{GraphBuilder, SynsetRecord};
use lexis_query::{LcsOptions, SemanticGraph, Subsumer};
use std::sync::Arc;

#[test]
fn test_common_hypernyms_dog_cat() {
    let graph = fixture_graph();
    let (dog, cat) = (id(&graph, "dog.n.01"), id(&graph, "cat.n.01"));

    let common = names(&graph, graph.common_hypernyms(dog, cat));
    assert!(common.contains(&"carnivore.n.01".to_string()));
    assert!(common.contains(&"entity.n.01".to_string()));
    assert!(!common.contains(&"canine.n.02".to_string()));

    let mut sorted = common.clone();
    sorted.sort();
    assert_eq!(common, sorted);
    assert_eq!(graph.common_hypernyms(cat, dog), graph.common_hypernyms(dog, cat));
}

#[test]
fn test_node_is_its_own_common_hypernym() {
    let graph = fixture_graph();
    let (dog, puppy) = (id(&graph, "dog.n.01"), id(&graph, "puppy.n.01"));
    assert!(graph.common_hypernyms(puppy, dog).contains(&dog));
    assert_eq!(graph.lowest_common_hypernyms(puppy, dog), vec![dog]);
}

#[test]
fn test_lowest_common_hypernyms() {
    let graph = fixture_graph();
    let lcs = |a: &str, b: &str| names(&graph, graph.lowest_common_hypernyms(id(&graph, a), id(&graph, b)));

    assert_eq!(lcs("dog.n.01", "cat.n.01"), ["carnivore.n.01"]);
    assert_eq!(lcs("dog.n.01", "person.n.01"), ["organism.n.01"]);
    assert_eq!(lcs("dog.n.01", "dog.n.01"), ["dog.n.01"]);
    assert_eq!(lcs("einstein.n.01", "physics.n.01"), ["entity.n.01"]);
    assert!(lcs("run.v.01", "eat.v.01").is_empty());
}

#[test]
fn test_lowest_common_hypernym_ties() {
    let graph = diamond();
    let (bottom, other) = (id(&graph, "bottom.n.01"), id(&graph, "other.n.01"));
    assert_eq!(
        names(&graph, graph.lowest_common_hypernyms(bottom, other)),
        ["left.n.01", "right.n.01"]
    );
}

#[test]
fn test_lowest_common_hypernyms_by_max_depth() {
    let graph = fixture_graph();
    // The shared ancestors form one chain, so both rankings agree
    let (dog, person) = (id(&graph, "dog.n.01"), id(&graph, "person.n.01"));
    let options = LcsOptions {
        simulate_root: false,
        use_min_depth: false,
    };
    assert_eq!(
        graph.lowest_common_hypernyms_with(dog, person, options),
        vec![Subsumer::Synset(id(&graph, "organism.n.01"))]
    );
}

#[test]
fn test_virtual_root_only_without_real_subsumer() {
    let graph = fixture_graph();
    let simulate = LcsOptions {
        simulate_root: true,
        use_min_depth: true,
    };

    let (run, eat) = (id(&graph, "run.v.01"), id(&graph, "eat.v.01"));
    assert_eq!(graph.lowest_common_hypernyms_with(run, eat, simulate), vec![Subsumer::VirtualRoot]);
    assert!(graph.lowest_common_hypernyms_with(run, eat, LcsOptions::default()).is_empty());

    let (run, walk) = (id(&graph, "run.v.01"), id(&graph, "walk.v.01"));
    assert_eq!(
        graph.lowest_common_hypernyms_with(run, walk, simulate),
        vec![Subsumer::Synset(id(&graph, "travel.v.01"))]
    );
}

#[test]
fn test_shortest_path_distance() {
    let graph = fixture_graph();
    let distance = |a: &str, b: &str, simulate: bool| {
        graph.shortest_path_distance(id(&graph, a), id(&graph, b), simulate)
    };

    assert_eq!(distance("dog.n.01", "dog.n.01", false), Some(0));
    assert_eq!(distance("dog.n.01", "cat.n.01", false), Some(4));
    assert_eq!(distance("cat.n.01", "dog.n.01", false), Some(4));
    assert_eq!(distance("dog.n.01", "entity.n.01", false), Some(8));
    assert_eq!(distance("run.v.01", "walk.v.01", false), Some(2));
    assert_eq!(distance("run.v.01", "eat.v.01", false), None);
    assert_eq!(distance("run.v.01", "eat.v.01", true), Some(3));
    assert_eq!(distance("dog.n.01", "run.v.01", false), None);
    assert_eq!(distance("dog.n.01", "run.v.01", true), Some(11));
    // A single-rooted taxonomy ignores the simulated root
    assert_eq!(distance("dog.n.01", "cat.n.01", true), Some(4));
}

#[test]
fn test_path_similarity() {
    let graph = fixture_graph();
    let (dog, cat) = (id(&graph, "dog.n.01"), id(&graph, "cat.n.01"));

    assert_close(graph.path_similarity(dog, cat, false).unwrap(), 0.2);
    assert_close(graph.path_similarity(dog, dog, false).unwrap(), 1.0);

    let (run, eat) = (id(&graph, "run.v.01"), id(&graph, "eat.v.01"));
    assert_eq!(graph.path_similarity(run, eat, false), None);
    assert_close(graph.path_similarity(run, eat, true).unwrap(), 0.25);
}

#[test]
fn test_lch_similarity() {
    let graph = fixture_graph();
    let lch = |a: &str, b: &str, simulate: bool| graph.lch_similarity(id(&graph, a), id(&graph, b), simulate);

    let dog_entity = lch("dog.n.01", "entity.n.01", false).unwrap().unwrap();
    assert!(dog_entity.is_finite() && dog_entity > 0.0);
    assert_close(dog_entity, 3.5f64.ln());

    assert_close(lch("dog.n.01", "cat.n.01", false).unwrap().unwrap(), 7.0f64.ln());
    assert_close(lch("dog.n.01", "dog.n.01", false).unwrap().unwrap(), 28.0f64.ln());

    assert_eq!(lch("run.v.01", "eat.v.01", false).unwrap(), None);
    // Verb depth 1, plus one for the simulated root; distance 3
    assert_close(lch("run.v.01", "eat.v.01", true).unwrap().unwrap(), (4.0f64 / 3.0).ln());
}

#[test]
fn test_lch_rejects_mixed_parts_of_speech() {
    let graph = fixture_graph();
    let err = graph
        .lch_similarity(id(&graph, "dog.n.01"), id(&graph, "run.v.01"), false)
        .unwrap_err();
    assert!(err.is_incompatible_pos());
    assert!(err.to_string().contains("dog.n.01"));
}

#[test]
fn test_wup_similarity() {
    let graph = fixture_graph();
    let wup = |a: &str, b: &str, simulate: bool| graph.wup_similarity(id(&graph, a), id(&graph, b), simulate);

    // dog.n.01 reaches the root through domestic_animal.n.01 in 8 hops,
    // shorter than its route through carnivore.n.01 (depth 11)
    assert_close(wup("dog.n.01", "cat.n.01", false).unwrap(), 22.0 / 21.0);
    assert_close(wup("cat.n.01", "dog.n.01", false).unwrap(), 22.0 / 21.0);
    assert_close(wup("dog.n.01", "dog.n.01", false).unwrap(), 1.0);
    assert_close(wup("dog.n.01", "puppy.n.01", false).unwrap(), 16.0 / 17.0);
    assert_close(wup("einstein.n.01", "physicist.n.01", false).unwrap(), 10.0 / 11.0);
    assert_close(wup("dog.n.01", "entity.n.01", false).unwrap(), 0.0);

    assert_eq!(wup("run.v.01", "eat.v.01", false), None);
    assert_close(wup("run.v.01", "eat.v.01", true).unwrap(), 0.0);
    // Shifted depths: travel 1, run 2, walk 2
    assert_close(wup("run.v.01", "walk.v.01", true).unwrap(), 0.5);
    assert_close(wup("run.v.01", "walk.v.01", false).unwrap(), 0.0);
}

#[test]
fn test_wup_on_tied_subsumers() {
    let graph = diamond();
    let (bottom, other) = (id(&graph, "bottom.n.01"), id(&graph, "other.n.01"));
    assert_close(graph.wup_similarity(bottom, other, false).unwrap(), 0.5);
}

#[test]
fn test_wup_uses_min_depth_of_inputs() {
    // root <- y <- a, root <- a, y <- b
    let name = |raw: &str| -> SynsetName { raw.parse().unwrap() };
    let mut builder = GraphBuilder::new();
    builder
        .add_synset(SynsetRecord::new(name("root.n.01"), ""))
        .add_synset(SynsetRecord::new(name("y.n.01"), "").with_relation(RelationKind::Hypernym, name("root.n.01")))
        .add_synset(
            SynsetRecord::new(name("a.n.01"), "")
                .with_relation(RelationKind::Hypernym, name("y.n.01"))
                .with_relation(RelationKind::Hypernym, name("root.n.01")),
        )
        .add_synset(SynsetRecord::new(name("b.n.01"), "").with_relation(RelationKind::Hypernym, name("y.n.01")));
    let graph = SemanticGraph::new(Arc::new(builder.build().unwrap()));
    let (a, b) = (id(&graph, "a.n.01"), id(&graph, "b.n.01"));

    assert_eq!(names(&graph, graph.lowest_common_hypernyms(a, b)), ["y.n.01"]);
    assert_eq!((graph.min_depth(a), graph.min_depth(b)), (1, 2));
    // 2 * depth(y) / (depth(a) + depth(b)) = 2 / 3
    assert_close(graph.wup_similarity(a, b, false).unwrap(), 2.0 / 3.0);
    assert_close(graph.wup_similarity(b, a, false).unwrap(), 2.0 / 3.0);
}
