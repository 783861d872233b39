//! Royal Mile Walk
//!
//! This example authors two tours, browses the library and follows the tour
//! with a scripted walk.
//!
//! Key concepts:
//! - Building a controller from thresholds or a JSON config file
//! - Authoring with implicit legs
//! - Rejected operations returning a `TourError`
//! - Live guidance from position updates
//!
//! Run with: cargo run --example royal_mile [config.json]
//! Set RUST_LOG=tourguide=debug to see the controller's tracing output.

use std::error::Error;
use tourguide::{Annotation, Controller, ControllerConfig};
use tracing_subscriber::EnvFilter;

fn load_config() -> Result<ControllerConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let document = std::fs::read_to_string(&path)?;
            Ok(ControllerConfig::from_json_str(&document)?)
        }
        None => Ok(ControllerConfig::new(10.0, 25.0)),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("tourguide=info".parse()?),
        )
        .init();

    println!("=== Royal Mile Walk ===\n");

    let config = load_config()?;
    println!(
        "Waypoint radius {}, separation {}\n",
        config.waypoint_radius, config.waypoint_separation
    );
    let mut controller = Controller::builder().config(config).build()?;

    println!("{}\n", controller.output());

    // Authoring
    println!("--- Authoring ---");
    controller.start_new_tour(
        "RM",
        "Royal Mile Walk",
        Annotation::from("A stroll down the famous Royal Mile"),
    )?;

    let stops = [
        (700.0, -900.0, Some("Start from Edinburgh Castle."), "Edinburgh Castle"),
        (400.0, -600.0, Some("Go down to the illusion museum."), "Camera Obscura"),
        (100.0, -300.0, None, "Whisky Museum"),
        (0.0, 0.0, Some("Walk on to the cathedral."), "St Giles Cathedral"),
    ];
    for (easting, northing, leg, waypoint) in stops {
        controller.set_location(easting, northing);
        if let Some(leg) = leg {
            controller.add_leg(Some(Annotation::from(leg)))?;
        }
        let out = controller.add_waypoint(Annotation::from(waypoint))?;
        println!("{out}");
    }

    // A second waypoint on the same spot is rejected
    match controller.add_waypoint(Annotation::from("St Giles again")) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("Rejected: {e}"),
    }

    let out = controller.end_new_tour()?;
    println!("\n{out}\n");

    controller.start_new_tour(
        "IF",
        "Informatics at UoE",
        Annotation::from("The Informatics Forum and Appleton Tower"),
    )?;
    controller.set_location(300.0, -500.0);
    controller.add_leg(Some(Annotation::from("Start at NE corner of George Square")))?;
    controller.add_waypoint(Annotation::from("Informatics Forum"))?;
    let out = controller.end_new_tour()?;
    println!("{out}\n");

    // Browsing
    println!("--- Browsing ---");
    println!("{}\n", controller.show_tour_details("rm")?);

    // Following
    println!("--- Following ---");
    controller.set_location(1000.0, -1000.0);
    println!("{}\n", controller.follow_tour("RM")?);

    let walk = [
        (700.0, -900.0),
        (500.0, -700.0),
        (400.0, -590.0),
        (100.0, -615.0),
        (105.0, -305.0),
        (0.0, 0.0),
    ];
    for (easting, northing) in walk {
        if let Some(guidance) = controller.set_location(easting, northing) {
            println!("@ ({easting}, {northing})\n{guidance}\n");
        }
    }

    let out = controller.end_selected_tour()?;
    println!("{out}\n");

    println!("Mode path: {:?}", controller.history().path());
    println!("\n=== Walk Complete ===");
    Ok(())
}
