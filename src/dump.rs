//! Snapshot of an automaton for debugging, renderable as Graphviz with the
//! `dot` feature.

use crate::{Automaton, Pattern, StateId, ROOT};

#[derive(Clone)]
struct AutomatonDumpNode {
    label: String,
    output: Option<String>,
}

#[derive(Clone)]
enum EdTarget {
    Goto(StateId, String),
    Failure(StateId),
    Output(StateId),
}

type EdgeDesc = (StateId, EdTarget);

pub struct AutomatonDump {
    nodes: Vec<AutomatonDumpNode>,
    edges: Vec<EdgeDesc>,
}

impl AutomatonDump {
    pub fn create<P>(automaton: &Automaton<P>) -> Self
    where
        P: Pattern + ToString,
        P::Char: ToString,
    {
        let mut nodes = Vec::with_capacity(automaton.state_count());
        let mut edges = Vec::new();

        for state in 0..automaton.state_count() {
            let label = automaton
                .label(state)
                .into_iter()
                .map(ToString::to_string)
                .collect();
            let output = automaton
                .terminal(state)
                .filter(|_| state != ROOT)
                .map(|id| automaton.pattern(id).to_string());
            nodes.push(AutomatonDumpNode { label, output });

            for (c, next) in automaton.goto_edges(state) {
                edges.push((state, EdTarget::Goto(next, c.to_string())));
            }
            if state != ROOT {
                edges.push((state, EdTarget::Failure(automaton.failure(state))));
            }
            if let Some(output) = automaton.output(state) {
                edges.push((state, EdTarget::Output(output)));
            }
        }

        Self { nodes, edges }
    }

    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(feature = "dot")]
mod dotdump {
    use std::io;

    use super::{AutomatonDump, EdTarget, EdgeDesc};
    use crate::StateId;

    type Nd = StateId;
    type Ed = EdgeDesc;

    impl AutomatonDump {
        pub fn to_dot(&self) -> io::Result<String> {
            let mut out = Vec::new();
            dot::render(self, &mut out)?;
            String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        }
    }

    fn escape_html(s: &str) -> String {
        let mut escaped = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    impl<'a> dot::Labeller<'a, Nd, Ed> for AutomatonDump {
        fn graph_id(&'a self) -> dot::Id<'a> {
            dot::Id::new("automaton").expect("valid graph id")
        }

        fn node_id(&'a self, n: &Nd) -> dot::Id<'a> {
            dot::Id::new(format!("N{}", n)).expect("valid node id")
        }

        fn node_label(&'a self, n: &Nd) -> dot::LabelText<'a> {
            let node = &self.nodes[*n];
            let mut s = if node.label.is_empty() {
                String::from("&epsilon;")
            } else {
                escape_html(&node.label)
            };

            if let Some(output) = &node.output {
                s.push_str(r#"<br/><font point-size="10">"#);
                s.push_str(&escape_html(output));
                s.push_str("</font>");
            }

            dot::LabelText::html(s)
        }

        fn edge_label(&'a self, e: &Ed) -> dot::LabelText<'a> {
            match &e.1 {
                EdTarget::Goto(_, c) => dot::LabelText::label(c.clone()),
                EdTarget::Failure(_) | EdTarget::Output(_) => dot::LabelText::label(""),
            }
        }

        fn edge_style(&'a self, e: &Ed) -> dot::Style {
            match &e.1 {
                EdTarget::Goto(..) => dot::Style::Solid,
                EdTarget::Failure(_) => dot::Style::Dashed,
                EdTarget::Output(_) => dot::Style::Dotted,
            }
        }
    }

    impl<'a> dot::GraphWalk<'a, Nd, Ed> for AutomatonDump {
        fn nodes(&'a self) -> dot::Nodes<'a, Nd> {
            dot::Nodes::Owned((0..self.nodes.len()).collect())
        }

        fn edges(&'a self) -> dot::Edges<'a, Ed> {
            dot::Edges::Borrowed(&self.edges)
        }

        fn source(&'a self, edge: &Ed) -> Nd {
            edge.0
        }

        fn target(&'a self, edge: &Ed) -> Nd {
            match &edge.1 {
                EdTarget::Goto(idx, _) => *idx,
                EdTarget::Failure(idx) => *idx,
                EdTarget::Output(idx) => *idx,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_labels_and_links() {
        let automaton = Automaton::build(["he", "she"]);
        let dump = automaton.dump();

        // root, h, he, s, sh, she
        assert_eq!(dump.state_count(), 6);

        let she = dump.nodes.iter().position(|n| n.label == "she").unwrap();
        assert_eq!(dump.nodes[she].output.as_deref(), Some("she"));
        assert_eq!(dump.nodes[ROOT].label, "");

        let he = dump.nodes.iter().position(|n| n.label == "he").unwrap();
        assert!(dump
            .edges
            .iter()
            .any(|(from, to)| *from == she && matches!(to, EdTarget::Output(s) if *s == he)));
    }

    #[test]
    fn counts_every_link() {
        let automaton = Automaton::build(["ab", "b"]);
        let dump = automaton.dump();

        // 3 goto edges, 3 failure edges, and "ab" -> "b" as the only output edge.
        assert_eq!(dump.edge_count(), 7);
    }

    #[cfg(feature = "dot")]
    #[test]
    fn renders_dot() {
        let automaton = Automaton::build(["ab", "b"]);
        let dot = automaton.dump().to_dot().unwrap();

        assert!(dot.starts_with("digraph automaton"));
        assert!(dot.contains("dashed"));
    }
}
