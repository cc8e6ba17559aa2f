/// Every representation has to satisfy the same contract. This macro instantiates the shared
/// contract tests for a given graph type. `$index_addressable` states whether raw indices are
/// accepted as vertex references.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $index_addressable:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, error::*, ops::*, repr::*};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of at most `m_ub` random normalized edges without loops for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges = (0..m_ub)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
                    .filter(|e| !e.is_loop())
                    .collect_vec();
                edges.sort_unstable();
                edges.dedup();
                edges
            }

            /// Adjacency as ground truth for the graph under test
            fn reference_matrix(n: NumNodes, edges: &[Edge]) -> Vec<Vec<bool>> {
                let mut matrix = vec![vec![false; n as usize]; n as usize];
                for &Edge(u, v) in edges {
                    matrix[u as usize][v as usize] = true;
                    matrix[v as usize][u as usize] = true;
                }
                matrix
            }

            fn assert_matches(graph: &$graph, matrix: &[Vec<bool>]) {
                let degrees = matrix
                    .iter()
                    .map(|row| row.iter().filter(|&&x| x).count() as NumNodes)
                    .collect_vec();
                assert_eq!(graph.degrees().collect_vec(), degrees);
                assert_eq!(
                    graph.degree_sequence(),
                    degrees.iter().copied().sorted().collect_vec()
                );
                assert_eq!(
                    graph.degree_sequence().iter().sum::<NumNodes>(),
                    2 * graph.number_of_edges()
                );

                for u in graph.vertices_range() {
                    for v in graph.vertices_range() {
                        assert_eq!(graph.has_edge(u, v), matrix[u as usize][v as usize]);
                    }
                }
            }

            #[test]
            fn graph_new() {
                for n in 1..30 {
                    let graph = <$graph>::new(n).unwrap();

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.degree_sequence(), vec![0; n as usize]);
                    assert_eq!(
                        graph.labels().to_vec(),
                        (0..n).map(|u| u.to_string()).collect_vec()
                    );
                    assert!(graph.is_null());
                    assert!(graph.is_simple());
                    assert_eq!(graph.is_complete(), n == 1);
                }
            }

            #[test]
            fn graph_from_labels() {
                let graph = <$graph>::from_labels(["M", "A", "C"]).unwrap();
                assert_eq!(graph.labels().to_vec(), vec!["M", "A", "C"]);
                assert_eq!(graph.node_of("C"), Some(2));
                assert_eq!(graph.label_of(1), "A");
                assert!(!graph.contains_label("Q"));
            }

            #[test]
            fn construction_errors() {
                assert_eq!(
                    <$graph>::new(0).unwrap_err(),
                    GraphError::from(ConstructionError::MissingVertices)
                );
                assert_eq!(
                    <$graph>::from_labels(Vec::<String>::new()).unwrap_err(),
                    GraphError::from(ConstructionError::MissingVertices)
                );
                assert_eq!(
                    <$graph>::from_labels(["x", "y", "x"]).unwrap_err(),
                    GraphError::from(ConstructionError::DuplicateLabel("x".into()))
                );
            }

            #[test]
            fn edge_editing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [5 as NumNodes, 10, 20] {
                    for m_ub in [n, n * 2, n * 5] {
                        let edges = random_edges(rng, n, m_ub);
                        let mut graph = <$graph>::new(n).unwrap();

                        for &Edge(u, v) in &edges {
                            assert!(graph.insert_edge(u, v));
                            // adding again is a no-op, in both orientations
                            assert!(!graph.add_edge(&u.to_string(), &v.to_string()).unwrap());
                            assert!(!graph.add_edge(&v.to_string(), &u.to_string()).unwrap());
                        }

                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        let mut matrix = reference_matrix(n, &edges);
                        assert_matches(&graph, &matrix);

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);
                            let present = matrix[u as usize][v as usize];

                            assert_eq!(
                                graph.remove_edge(&v.to_string(), &u.to_string()).unwrap(),
                                present
                            );
                            if present {
                                matrix[u as usize][v as usize] = false;
                                matrix[v as usize][u as usize] = false;
                                m -= 1;
                            }
                            assert_eq!(m, graph.number_of_edges());
                        }

                        assert_matches(&graph, &matrix);
                    }
                }
            }

            #[test]
            fn add_then_remove_restores() {
                let rng = &mut Pcg64Mcg::seed_from_u64(7);
                let n = 12;
                let mut graph = <$graph>::new(n).unwrap();
                for Edge(u, v) in random_edges(rng, n, 20) {
                    graph.insert_edge(u, v);
                }

                let before = graph.edge_set();
                let m = graph.number_of_edges();

                for u in 0..n {
                    for v in (u + 1)..n {
                        if graph.has_edge(u, v) {
                            continue;
                        }
                        let (lu, lv) = (u.to_string(), v.to_string());
                        assert!(graph.add_edge(&lu, &lv).unwrap());
                        assert_eq!(graph.number_of_edges(), m + 1);
                        assert!(graph.remove_edge(&lv, &lu).unwrap());
                        assert_eq!(graph.number_of_edges(), m);
                        assert_eq!(graph.edge_set(), before);
                    }
                }
            }

            #[test]
            fn invalid_vertices_leave_graph_unchanged() {
                let mut graph = <$graph>::from_labels(["A", "B", "C"]).unwrap();
                graph.add_edge("A", "B").unwrap();

                assert_eq!(
                    graph.add_edge("A", "Z").unwrap_err(),
                    GraphError::InvalidVertex("'Z'".into())
                );
                assert_eq!(
                    graph.remove_edge("Z", "B").unwrap_err(),
                    GraphError::InvalidVertex("'Z'".into())
                );
                assert_eq!(
                    graph.add_edge("C", 7 as Node).unwrap_err(),
                    GraphError::InvalidVertex("#7".into())
                );
                assert_eq!(graph.number_of_edges(), 1);
                assert!(graph.has_edge(0, 1));

                assert_eq!(graph.add_edge(2 as Node, "A").is_ok(), $index_addressable);
                assert_eq!(graph.has_edge(0, 2), $index_addressable);
            }

            #[test]
            fn complete_graphs() {
                for n in 2..8 {
                    let mut graph = <$graph>::new(n).unwrap();
                    for u in 0..n {
                        for v in (u + 1)..n {
                            graph.insert_edge(u, v);
                        }
                    }

                    assert!(graph.is_complete());
                    assert!(!graph.is_null());
                    assert_eq!(graph.number_of_edges(), n * (n - 1) / 2);

                    for u in 0..n {
                        for v in (u + 1)..n {
                            let mut graph = graph.clone();
                            graph.delete_edge(v, u);
                            assert!(!graph.is_complete());
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
