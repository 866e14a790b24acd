//! Headless driver for the state-primitives tour.
//!
//! Reads commands from a script file (first argument) or interactively from
//! stdin, applies them to the demo page bindings, and prints snapshots,
//! exactly what a rendering frontend would do with buttons and text inputs.

mod script;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::Context;
use tether_core::prelude::*;
use tether_widgets::{DemoPage, PageBindings};

use crate::script::{Command, CounterOp, WhichCounter};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let store = Store::shared(0i64);
    let mut sched = Scheduler::new();
    let page = {
        let store = store.clone();
        sched.compose(move |s| DemoPage(s, &store))
    };
    log::debug!("page composed; external store at {}", store.snapshot());

    let input: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) => Box::new(BufReader::new(
            File::open(&path).with_context(|| format!("opening script '{path}'"))?,
        )),
        None => {
            println!("hooks-tour: enter commands, 'show' to inspect, 'quit' to leave");
            Box::new(BufReader::new(io::stdin()))
        }
    };

    for line in input.lines() {
        let line = line.context("reading command")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(cmd) => apply(&cmd, &mut sched, &page),
            Err(e) => eprintln!("error: {e}"),
        }
    }

    sched.dispose();
    Ok(())
}

fn apply(cmd: &Command, sched: &mut Scheduler, page: &PageBindings) {
    match cmd {
        Command::Counter(which, op) => {
            let counter = match which {
                WhichCounter::A => &page.counter_a,
                WhichCounter::B => &page.counter_b,
            };
            match op {
                CounterOp::Increment => (counter.increment)(),
                CounterOp::Decrement => (counter.decrement)(),
                CounterOp::Reset => (counter.reset)(),
            }
            println!(
                "counter {which:?}: {} ({:?})",
                counter.value(),
                counter.classification()
            );
        }
        Command::Likes(action) => {
            (page.likes.dispatch)(*action);
            println!("likes: {}", page.likes.likes());
        }
        Command::StoreIncrement => {
            (page.store_a.increment)();
            println!(
                "store: a={} b={}",
                page.store_a.value(),
                page.store_b.value()
            );
        }
        Command::DeriveSet(text) => {
            (page.derived.set_text)(text.clone());
            println!(
                "derived: {:?} -> {} (computed {}x)",
                page.derived.text(),
                page.derived.derived(),
                page.derived.computations()
            );
        }
        Command::SearchType(text) => {
            (page.search.type_text)(text.clone());
            println!(
                "search: box={:?} filtering-by={:?} pending={}",
                page.search.immediate(),
                page.search.lagged(),
                page.search.is_pending()
            );
        }
        Command::FieldFocus => {
            page.field.focus();
            println!("field: focused={}", page.field.is_focused());
        }
        Command::FieldBlur => {
            page.field.blur();
            println!("field: focused={}", page.field.is_focused());
        }
        Command::FieldSet(text) => {
            page.field.set_value(text.clone());
            println!("field: {:?}", page.field.value());
        }
        Command::NameSet(text) => {
            (page.name_field.set_text)(text.clone());
            println!("{} [{}]: {:?}", page.name_field.label, page.name_field.id, page.name_field.text());
        }
        Command::EmailSet(text) => {
            (page.email_field.set_text)(text.clone());
            println!("{} [{}]: {:?}", page.email_field.label, page.email_field.id, page.email_field.text());
        }
        Command::Settle => {
            let ran = sched.drain_deferred();
            println!("settled ({ran} deferred job(s) applied)");
        }
        Command::Show => show(page),
        Command::Quit => unreachable!("handled by the driver loop"),
    }
}

fn show(page: &PageBindings) {
    println!("counter a : {} ({:?})", page.counter_a.value(), page.counter_a.classification());
    println!("counter b : {} ({:?})", page.counter_b.value(), page.counter_b.classification());
    println!("likes     : {}", page.likes.likes());
    println!("store     : a={} b={}", page.store_a.value(), page.store_b.value());
    println!(
        "derived   : {:?} -> {}",
        page.derived.text(),
        page.derived.derived()
    );
    println!(
        "search    : box={:?} filtering-by={:?} pending={} results={:?}",
        page.search.immediate(),
        page.search.lagged(),
        page.search.is_pending(),
        page.search.results()
    );
    println!(
        "field     : {:?} focused={}",
        page.field.value(),
        page.field.is_focused()
    );
    for f in [&page.name_field, &page.email_field] {
        println!("{:<10}: [{}] {:?}", f.label, f.id, f.text());
    }
}
