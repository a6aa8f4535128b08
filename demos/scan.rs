use dictlink::Automaton;

fn main() {
    let automaton = Automaton::build(["CAN", "AN", "A", "she", "he", "hers"]);

    #[cfg(feature = "dot")]
    match automaton.dump().to_dot() {
        Ok(dot) => println!("{}", dot),
        Err(e) => eprintln!("failed to render automaton: {}", e),
    }

    let text = "he and she CAN CAR an herb";

    let mut searcher = automaton.searcher();
    for c in text.chars() {
        let found: Vec<_> = searcher
            .next(&c)
            .map(|m| *automaton.pattern(m.pattern()))
            .collect();
        if !found.is_empty() {
            println!("i={}: {:?}", searcher.position() - 1, found);
        }
    }
}
