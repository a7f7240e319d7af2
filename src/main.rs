use anyhow::{anyhow, Context, Result};
use linkedlist::LinkedList;
use log::{debug, info, warn};
use regex::Regex;
use std::{env, fs::File, io::Read};

mod linkedlist;

type Value = i64;

/*
 * The two lists built when no input file is given.
 * Both are 3->2->1.
 */
fn demo_lists() -> (LinkedList<Value>, LinkedList<Value>) {
    let mut llist1 = LinkedList::new();
    let mut llist2 = LinkedList::new();
    for value in 1..=3 {
        llist1.push(value);
    }
    for value in 1..=3 {
        llist2.push(value);
    }
    (llist1, llist2)
}

/*
 * Parse two lists from input.
 * Input should be exactly two lines, each a list written head first :
 * <value>-><value>->...->NULL
 *
 * The trailing NULL is optional, an empty line or a lone NULL is an empty list.
 * An arrow must always be followed by a value or NULL.
 */
fn parse(input: &str) -> Result<(LinkedList<Value>, LinkedList<Value>)> {
    let line_re = Regex::new(r"^\s*(?:(?:-?\d+\s*->\s*)*(?:-?\d+|NULL))?\s*$")?;
    let value_re = Regex::new(r"-?\d+")?;

    let mut lists = input
        .lines()
        .map(|l| {
            if !line_re.is_match(l) {
                return Err(anyhow!("Failed to parse line {}", l));
            }
            let values = value_re
                .find_iter(l)
                .map(|m| {
                    m.as_str()
                        .parse::<Value>()
                        .with_context(|| format!("Invalid value {} in line {}", m.as_str(), l))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(LinkedList::from_sequence(values))
        })
        .collect::<Result<Vec<_>>>()?;

    if lists.len() != 2 {
        return Err(anyhow!("Expected exactly two lists, found {}", lists.len()));
    }
    let llist2 = lists.pop().ok_or(anyhow!("Missing second list"))?;
    let llist1 = lists.pop().ok_or(anyhow!("Missing first list"))?;
    Ok((llist1, llist2))
}

fn read_lists(path: &str) -> Result<(LinkedList<Value>, LinkedList<Value>)> {
    let mut f = File::open(path).context("Failed to open file")?;
    let mut input = String::new();
    f.read_to_string(&mut input).context("Failed to read file")?;
    parse(&input).context("Failed to create lists")
}

fn verdict(identical: bool) -> &'static str {
    if identical {
        "Identical "
    } else {
        "Not identical "
    }
}

/*
 * No argument runs the demo, one argument reads a lists file.
 * Anything else is reported and falls back to the demo.
 */
fn select_lists(args: &[String]) -> Result<(LinkedList<Value>, LinkedList<Value>)> {
    match args.len() {
        0 | 1 => Ok(demo_lists()),
        2 => read_lists(&args[1]),
        n => {
            warn!("Ignoring {} unexpected arguments", n - 2);
            eprintln!(
                "Usage : {} [lists file]",
                args.first().map(String::as_str).unwrap_or("identical-lists")
            );
            Ok(demo_lists())
        }
    }
}

fn init_logger() {
    let env = env_logger::Env::new()
        .filter("IDENTICAL_LISTS_LOG")
        .write_style("IDENTICAL_LISTS_LOG_STYLE");
    env_logger::init_from_env(env);
}

fn main() -> Result<()> {
    init_logger();

    let args: Vec<String> = env::args().collect();
    let (llist1, llist2) = select_lists(&args)?;
    info!("llist1 ({} nodes): {}", llist1.len(), llist1);
    info!("llist2 ({} nodes): {}", llist2.len(), llist2);
    if llist1.is_empty() && llist2.is_empty() {
        debug!("Comparing two empty lists");
    }
    debug!("llist1 = {:?}, llist2 = {:?}", llist1, llist2);

    println!("{}", verdict(llist1.are_identical(&llist2)));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &LinkedList<Value>) -> Vec<Value> {
        list.iter().copied().collect()
    }

    #[test]
    fn demo_is_identical() {
        let (a, b) = demo_lists();
        assert_eq!(values(&a), vec![3, 2, 1]);
        assert_eq!(values(&b), vec![3, 2, 1]);
        assert_eq!(verdict(a.are_identical(&b)), "Identical ");
    }

    #[test]
    fn verdict_lines() {
        assert_eq!(verdict(true), "Identical ");
        assert_eq!(verdict(false), "Not identical ");
    }

    #[test]
    fn parse_lists() {
        let (a, b) = parse("3->2->1->NULL\n4 -> 2 -> 1").unwrap();
        assert_eq!(values(&a), vec![3, 2, 1]);
        assert_eq!(values(&b), vec![4, 2, 1]);
        assert_eq!(verdict(a.are_identical(&b)), "Not identical ");
    }

    #[test]
    fn parse_negative_and_length_mismatch() {
        let (a, b) = parse("3->-2->1\n3->-2").unwrap();
        assert_eq!(values(&a), vec![3, -2, 1]);
        assert!(!a.are_identical(&b));
    }

    #[test]
    fn parse_empty_lists() {
        let (a, b) = parse("NULL\nNULL").unwrap();
        assert!(a.is_empty());
        assert!(b.is_empty());
        assert!(a.are_identical(&b));

        let (a, b) = parse("\n1->NULL").unwrap();
        assert_eq!(a.len(), 0);
        assert_eq!(values(&b), vec![1]);
    }

    #[test]
    fn parse_rejects_malformed_line() {
        assert!(parse("3->x->1\n3->2->1").is_err());
        assert!(parse("3,2,1\n3->2->1").is_err());
        assert!(parse("NULL->1\n1").is_err());
        assert!(parse("3->2->\n3->2").is_err());
        assert!(parse("3->\n3").is_err());
        assert!(parse("->\n3").is_err());
    }

    #[test]
    fn parse_rejects_out_of_range_value() {
        assert!(parse("99999999999999999999\n1").is_err());
    }

    #[test]
    fn parse_rejects_wrong_line_count() {
        assert!(parse("1->2").is_err());
        assert!(parse("1\n2\n3").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn read_lists_missing_file() {
        let path = env::temp_dir().join("identical-lists-does-not-exist.txt");
        let err = read_lists(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Failed to open file"));
    }

    #[test]
    fn read_lists_from_file() {
        let path = env::temp_dir().join(format!("identical-lists-{}.txt", std::process::id()));
        std::fs::write(&path, "3->2->1->NULL\n3->2->1\n").unwrap();
        let (a, b) = read_lists(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(a.are_identical(&b));
        assert_eq!(values(&a), vec![3, 2, 1]);
    }

    #[test]
    fn extra_arguments_fall_back_to_demo() {
        let args: Vec<String> = vec!["identical-lists".into(), "a".into(), "b".into()];
        let (a, b) = select_lists(&args).unwrap();
        assert_eq!(values(&a), vec![3, 2, 1]);
        assert!(a.are_identical(&b));

        let (a, b) = select_lists(&["identical-lists".to_string()]).unwrap();
        assert!(a.are_identical(&b));
        let (a, _) = select_lists(&[]).unwrap();
        assert_eq!(a.len(), 3);
    }
}
