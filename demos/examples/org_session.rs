// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An organization chart session: load, collapse, search, select, reload.
//!
//! This example shows how to combine:
//! - `orgchart_model` for normalizing a nested JSON record,
//! - `orgchart_collapse` for the derived view a renderer draws,
//! - `orgchart_directory` for the flat, searchable member list,
//! - `orgchart_selection` for reveal-on-select and its effects.
//!
//! Run:
//! - `cargo run -p orgchart_demos --example org_session`

use orgchart_collapse::{ViewFlags, ViewTree};
use orgchart_directory::{SearchTerm, search_term};
use orgchart_model::{MemberId, RawRecord};
use orgchart_selection::{DetailUnavailable, Effect, SelectionController};

const ORG: &str = include_str!("../data/org.json");

/// What the member-detail source hands back in this demo.
#[derive(Clone, Debug)]
struct Contact {
    email: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let raw: RawRecord = serde_json::from_str(ORG)?;
    let mut org: SelectionController<Contact> = SelectionController::new();
    let generation = org.load(&raw)?;
    println!("== loaded {} members (generation {})", org.total(), generation.get());

    // Collapse both vice presidents.
    org.toggle(MemberId(2));
    org.toggle(MemberId(3));
    print_view("collapsed", org.view().as_ref());

    // Search the directory and pick a hidden member.
    let term = SearchTerm::new("ÉLODIE");
    let picked = match org.model() {
        Some(model) => {
            let hits = search_term(model, &term);
            for entry in &hits {
                println!("search {:?}: {} ({})", term.as_str(), entry.name, entry.role.unwrap_or("-"));
            }
            hits.first().map(|entry| entry.id)
        }
        None => None,
    };
    let Some(picked) = picked else {
        return Ok(());
    };
    org.select(picked);
    print_view("after select", org.view().as_ref());

    // Run the effects the way a host would, after laying out the new view.
    for effect in org.drain_effects() {
        match effect {
            Effect::BringIntoView(request) => match org.accept_center(request) {
                Some(id) => println!("center viewport on {id}"),
                None => println!("skip stale centering request for {}", request.id),
            },
            Effect::FetchDetail(request) => {
                let outcome = lookup_contact(&org, request.id);
                org.detail_loaded(request, outcome);
            }
        }
    }
    println!("detail panel: {:?}", org.detail());
    if let Some(contact) = org.detail().payload() {
        println!("contact: {}", contact.email);
    }

    if let Some(view) = org.view() {
        for edge in view.edges().filter(|edge| edge.highlighted) {
            println!("highlighted edge {} -> {}", edge.source, edge.target);
        }
    }

    // A broken refresh keeps the current chart.
    let broken = r#"{ "id": 1, "name": "Ada Moreno", "children": [ { "name": "Nobody" } ] }"#;
    let raw: RawRecord = serde_json::from_str(broken)?;
    if let Err(err) = org.load(&raw) {
        println!("refresh rejected: {err}; still showing generation {}", org.generation().get());
    }

    // A good refresh starts over: everything expanded, nothing selected.
    let raw: RawRecord = serde_json::from_str(ORG)?;
    org.load(&raw)?;
    print_view("after reload", org.view().as_ref());
    Ok(())
}

fn lookup_contact(
    org: &SelectionController<Contact>,
    id: MemberId,
) -> Result<Contact, DetailUnavailable> {
    let member = org.model().and_then(|model| model.get(id));
    match member {
        Some(member) if member.role().is_some() => Ok(Contact {
            email: format!("{}@example.org", member.initials().to_lowercase()),
        }),
        _ => Err(DetailUnavailable { id }),
    }
}

fn print_view(label: &str, view: Option<&ViewTree<'_>>) {
    println!("== {label}");
    let Some(view) = view else {
        println!("(no chart)");
        return;
    };
    for node in view.iter() {
        let member = node.node();
        let marker = if node.flags().contains(ViewFlags::HIGHLIGHTED) {
            '*'
        } else if node.flags().contains(ViewFlags::ON_PATH) {
            '|'
        } else {
            ' '
        };
        let fold = match (node.flags().contains(ViewFlags::HAS_CHILDREN), node.is_collapsed()) {
            (true, true) => "[+]",
            (true, false) => "[-]",
            (false, _) => "   ",
        };
        println!(
            "{marker} {:indent$}{fold} {} [{}] {}",
            "",
            member.name(),
            member.initials(),
            member.role().unwrap_or(""),
            indent = node.depth() * 2,
        );
    }
}
