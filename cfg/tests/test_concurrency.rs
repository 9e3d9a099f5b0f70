mod support;

use std::thread;

use cfg::classify_ll::LlParseTable;
use cfg::ll_parser::LlParser;
use cfg::Cfg;

use support::{arith_grammar, names};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_shared_table() {
    assert_send_sync::<Cfg>();
    assert_send_sync::<LlParseTable<'static>>();

    let cfg = arith_grammar();
    let table = LlParseTable::new(&cfg).unwrap();
    let inputs: [&[&str]; 4] = [
        &["id"],
        &["id", "+", "id"],
        &["(", "id", ")", "*", "id"],
        &["id", "*"],
    ];
    let results: Vec<Option<Vec<String>>> = thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|&input| {
                let table = &table;
                scope.spawn(move || {
                    LlParser::new(table)
                        .parse_names(input)
                        .ok()
                        .map(|tree| names(table.grammar(), tree.leaves()))
                })
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });
    assert_eq!(results[0].as_deref(), Some(&["id".to_string()][..]));
    assert_eq!(results[1].as_ref().map(Vec::len), Some(3));
    assert_eq!(results[2].as_ref().map(Vec::len), Some(5));
    assert_eq!(results[3], None);
}
