//! panenav moves focus between the panes of a split terminal layout.
//!
//! A layout is a tree of containers and panes ([`layout_manager::LayoutTree`]), each
//! with a rectangle on screen. Given the focused pane and a direction, a
//! [`navigation::Navigator`] picks the pane that should receive focus next.

#[macro_use]
extern crate log;

pub mod constants;
pub mod geometry;
pub mod layout_manager;
pub mod navigation;
pub mod options;
pub mod utils {
    pub mod error;
    pub mod general;
    pub mod logging;
}

use std::{io::Write, path::Path};

use anyhow::{Context, Result};

use crate::{
    geometry::Split,
    layout_manager::{enumerate_descendants, LayoutTree, TreeQuery},
    navigation::{Direction, NavigationOutcome, Navigator},
    options::{
        args::{NavigationArgs, PanenavArgs},
        get_config_path, get_or_create_config, read_layout, NavSettings, OptionError,
    },
    utils::{error::NavResult, general::dict_diff},
};

fn split_name(split: Option<Split>) -> &'static str {
    split.map(|split| split.as_str()).unwrap_or("-")
}

/// Describes every node of the layout, one line each: the root first, then
/// all containers, then all panes.
pub fn list_layout(tree: &LayoutTree) -> NavResult<Vec<String>> {
    let (containers, leaves) = enumerate_descendants(tree, tree.root())?;
    let mut lines = Vec::with_capacity(containers.len() + leaves.len() + 1);

    if let Some(root) = tree.container(tree.root()) {
        lines.push(format!("root {} {}", split_name(root.split), root.rect));
    }

    lines.extend(containers.into_iter().filter_map(|id| {
        tree.container(id).map(|container| {
            format!(
                "container {} {} {}",
                container.name.as_deref().unwrap_or("-"),
                split_name(container.split),
                container.rect
            )
        })
    }));

    lines.extend(leaves.into_iter().filter_map(|id| {
        tree.leaf(id).map(|leaf| {
            format!(
                "pane {} {} {}",
                leaf.name,
                leaf.rect,
                leaf.uuid.map(|uuid| uuid.to_string()).unwrap_or_default()
            )
        })
    }));

    Ok(lines)
}

/// Describes how a navigation request was resolved.
pub fn describe_outcome(
    tree: &LayoutTree, current: &str, direction: Direction,
    outcome: &NavigationOutcome<indextree::NodeId>,
) -> Vec<String> {
    let names = |ids: &[indextree::NodeId]| {
        ids.iter()
            .filter_map(|&id| tree.leaf(id).map(|leaf| leaf.name.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let target = match outcome.target.and_then(|id| tree.leaf(id)) {
        Some(leaf) => match leaf.uuid {
            Some(uuid) => format!("{} ({uuid})", leaf.name),
            None => leaf.name.clone(),
        },
        None => "none".to_string(),
    };

    vec![
        format!("moving {direction} from '{current}'"),
        format!("candidates: {}", names(&outcome.candidates)),
        format!("tied: {}", names(&outcome.winners)),
        format!("target: {target}"),
    ]
}

/// Runs panenav with the given arguments. The chosen pane is written to `out`,
/// details requested by `--verbose` to `err`.
pub fn run<O: Write, E: Write>(args: &PanenavArgs, out: &mut O, err: &mut E) -> Result<()> {
    let general_args = &args.general_args;

    let config_path = get_config_path(general_args.config_location.as_deref().map(Path::new));
    let config = get_or_create_config(config_path.as_deref())
        .context("Unable to properly parse or create the config file.")?;

    if general_args.show_changed_config {
        let from_config = NavSettings::new(&NavigationArgs::default(), None, &config)?;
        let changed = dict_diff(&NavSettings::default().as_map(), &from_config.as_map());
        for (key, value) in changed {
            writeln!(out, "{key} = {value}")?;
        }

        return Ok(());
    }

    let settings = NavSettings::new(
        &args.navigation_args,
        general_args.layout.as_deref(),
        &config,
    )?;

    let layout_path = settings.layout.as_deref().ok_or_else(|| {
        OptionError::arg("no layout file was given, set one with '--layout' or the 'layout' flag.")
    })?;
    let tree = read_layout(layout_path)
        .context("Found an issue while trying to build the layout.")?;

    if general_args.list {
        for line in list_layout(&tree)? {
            writeln!(out, "{line}")?;
        }

        return Ok(());
    }

    let from = args.navigation_args.from.as_deref().ok_or_else(|| {
        OptionError::arg("'--from' must be set to the name of the focused pane.")
    })?;
    let current = tree.find_leaf(from).ok_or_else(|| {
        OptionError::arg(format!("'{from}' is not the name of a pane in the layout."))
    })?;
    let direction = settings.direction.ok_or_else(|| {
        OptionError::arg("no direction was given and 'default_direction' is not set.")
    })?;

    let outcome = Navigator::new(settings.cursor_tiebreak).navigate(
        &tree,
        tree.root(),
        current,
        direction,
        settings.cursor,
    )?;

    if args.navigation_args.verbose {
        for line in describe_outcome(&tree, from, direction, &outcome) {
            writeln!(err, "{line}")?;
        }
    }

    if let Some(leaf) = outcome.target.and_then(|id| tree.leaf(id)) {
        writeln!(out, "{}", leaf.name)?;
    }

    Ok(())
}
