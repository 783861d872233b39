//! Shared fixtures for the integration tests.
//!
//! Locations are roughly based on a St Giles Cathedral reference point.

#![allow(dead_code)]

use tourguide::{Annotation, Chunk, Controller, Output};

pub const WAYPOINT_RADIUS: f64 = 10.0;
pub const WAYPOINT_SEPARATION: f64 = 25.0;

pub fn controller() -> Controller {
    Controller::builder()
        .waypoint_radius(WAYPOINT_RADIUS)
        .waypoint_separation(WAYPOINT_SEPARATION)
        .build()
        .expect("test thresholds are valid")
}

pub fn ann(text: &str) -> Annotation {
    Annotation::from(text)
}

pub fn create_header(title: &str, leg_count: usize, waypoint_count: usize) -> Chunk {
    Chunk::CreateHeader {
        title: title.into(),
        leg_count,
        waypoint_count,
    }
}

pub fn follow_header(title: &str, stage: usize, waypoint_count: usize) -> Chunk {
    Chunk::FollowHeader {
        title: title.into(),
        stage,
        waypoint_count,
    }
}

pub fn follow_leg(text: &str) -> Chunk {
    Chunk::FollowLeg {
        annotation: ann(text),
    }
}

pub fn follow_waypoint(text: &str) -> Chunk {
    Chunk::FollowWaypoint {
        annotation: ann(text),
    }
}

/// Assert the output holds exactly one chunk equal to `expected`.
pub fn assert_single(output: &Output, expected: Chunk) {
    assert_eq!(output.len(), 1, "Number of chunks in {output:?}");
    assert_eq!(output[0], expected);
}

/// Assert a `FollowBearing` chunk, comparing to whole degrees and units.
pub fn assert_bearing(chunk: &Chunk, bearing: f64, distance: f64) {
    match chunk {
        Chunk::FollowBearing {
            bearing: actual_bearing,
            distance: actual_distance,
        } => {
            assert_eq!(actual_bearing.round(), bearing, "bearing {actual_bearing}");
            assert_eq!(actual_distance.round(), distance, "distance {actual_distance}");
        }
        other => panic!("Expected FollowBearing, got {other:?}"),
    }
}

pub fn create_one_point_tour(controller: &mut Controller) {
    let title = "Informatics at UoE";
    let out = controller
        .start_new_tour("T1", title, ann("The Informatics Forum and Appleton Tower\n"))
        .unwrap();
    assert_single(&out, create_header(title, 0, 0));

    controller.set_location(300.0, -500.0);

    let out = controller
        .add_leg(Some(ann("Start at NE corner of George Square\n")))
        .unwrap();
    assert_single(&out, create_header(title, 1, 0));

    let out = controller.add_waypoint(ann("Informatics Forum")).unwrap();
    assert_single(&out, create_header(title, 1, 1));

    controller.end_new_tour().unwrap();
}

pub fn create_two_point_tour(controller: &mut Controller) {
    let title = "Old Town";
    controller
        .start_new_tour("T2", title, ann("From Edinburgh Castle to Holyrood\n"))
        .unwrap();

    controller.set_location(-500.0, 0.0);

    // leg before this waypoint is added implicitly
    let out = controller.add_waypoint(ann("Edinburgh Castle\n")).unwrap();
    assert_single(&out, create_header(title, 1, 1));

    let out = controller.add_leg(Some(ann("Royal Mile\n"))).unwrap();
    assert_single(&out, create_header(title, 2, 1));

    assert!(controller.end_new_tour().is_err());

    controller.set_location(1000.0, 300.0);

    let out = controller.add_waypoint(ann("Holyrood Palace\n")).unwrap();
    assert_single(&out, create_header(title, 2, 2));

    controller.end_new_tour().unwrap();
}

pub fn create_four_point_tour(controller: &mut Controller) {
    let title = "Royal Mile Walk";
    controller
        .start_new_tour("T2", title, ann("A stroll down the famous Royal Mile\n"))
        .unwrap();

    let stops = [
        (700.0, -900.0, "Start from Edinburgh Castle.\n", "Edinburgh Castle"),
        (400.0, -600.0, "Go down to the famous illusion museum.\n", "Camera Obscura"),
        (
            100.0,
            -300.0,
            "Check the fancy shops and stop by to taste the finest whiskies.\n",
            "Whisky Museum",
        ),
        (
            0.0,
            0.0,
            "Stop by to cleanse your sins after drinking that 4 glasses.\n",
            "St Giles Cathedral",
        ),
    ];

    for (i, (easting, northing, leg, waypoint)) in stops.into_iter().enumerate() {
        controller.set_location(easting, northing);

        let out = controller.add_leg(Some(ann(leg))).unwrap();
        assert_single(&out, create_header(title, i + 1, i));

        let out = controller.add_waypoint(ann(waypoint)).unwrap();
        assert_single(&out, create_header(title, i + 1, i + 1));
    }

    controller.end_new_tour().unwrap();
}

pub fn create_three_point_tour_without_legs(controller: &mut Controller) {
    let title = "Quick Royal Mile Walk";
    controller
        .start_new_tour("T3", title, ann("A stroll down the famous Royal Mile\n"))
        .unwrap();

    let stops = [
        (700.0, -900.0, "Edinburgh Castle"),
        (400.0, -600.0, "Camera Obscura"),
        (100.0, -300.0, "Whisky Museum"),
    ];

    for (i, (easting, northing, waypoint)) in stops.into_iter().enumerate() {
        controller.set_location(easting, northing);
        let out = controller.add_waypoint(ann(waypoint)).unwrap();
        assert_single(&out, create_header(title, i + 1, i + 1));
    }

    controller.end_new_tour().unwrap();
}
