// tests/robot_motion.rs
use glam::IVec2;
use tabletop_robot::{Orientation, Robot, Rotation, SimulationArea};

const ALL_ORIENTATIONS: [Orientation; 4] = [
    Orientation::North,
    Orientation::East,
    Orientation::South,
    Orientation::West,
];

fn robot_5x5() -> Robot {
    let area = SimulationArea::new(5, 5).expect("5x5 is a valid area");
    Robot::new(area)
}

#[test]
fn area_rejects_negative_dimensions() {
    assert!(SimulationArea::new(-1, 5).is_err());
    assert!(SimulationArea::new(5, -1).is_err());
    assert!(SimulationArea::new(0, 0).is_ok(), "a single grid point is a valid area");
}

#[test]
fn area_bounds_are_inclusive() {
    let area = SimulationArea::new(5, 5).unwrap();
    assert!(area.contains(IVec2::new(0, 0)));
    assert!(area.contains(IVec2::new(5, 5)));
    assert!(!area.contains(IVec2::new(6, 5)));
    assert!(!area.contains(IVec2::new(5, 6)));
    assert!(!area.contains(IVec2::new(-1, 0)));
    assert!(!area.contains(IVec2::new(0, -1)));
}

#[test]
fn rotations_are_inverses() {
    let mut robot = robot_5x5();
    for orientation in ALL_ORIENTATIONS {
        robot.place(IVec2::new(2, 2), orientation);
        robot.rotate(Rotation::Left);
        assert_eq!(robot.rotate(Rotation::Right), Some(orientation));
        robot.rotate(Rotation::Right);
        assert_eq!(robot.rotate(Rotation::Left), Some(orientation));
    }
}

#[test]
fn four_right_turns_close_the_cycle() {
    let mut robot = robot_5x5();
    for orientation in ALL_ORIENTATIONS {
        robot.place(IVec2::new(2, 2), orientation);
        for _ in 0..4 {
            robot.rotate(Rotation::Right);
        }
        assert_eq!(robot.pose().unwrap().facing, orientation);
    }
}

#[test]
fn left_rotation_wraps_at_north() {
    let mut robot = robot_5x5();
    robot.place(IVec2::new(2, 2), Orientation::North);
    assert_eq!(robot.rotate(Rotation::Left), Some(Orientation::West));
}

#[test]
fn right_rotation_wraps_at_west() {
    let mut robot = robot_5x5();
    robot.place(IVec2::new(2, 2), Orientation::West);
    assert_eq!(robot.rotate(Rotation::Right), Some(Orientation::North));
}

#[test]
fn interior_move_changes_one_coordinate_by_one() {
    let start = IVec2::new(2, 2);
    for orientation in ALL_ORIENTATIONS {
        let mut robot = robot_5x5();
        robot.place(start, orientation);
        assert!(robot.move_forward(1));

        let pose = robot.pose().unwrap();
        let delta = pose.position - start;
        assert_eq!(delta, orientation.step(), "move should step one unit along the facing");
        assert_eq!(delta.x.abs() + delta.y.abs(), 1, "exactly one axis moves by one");
        assert!(robot.area().contains(pose.position));
    }
}

#[test]
fn move_at_southern_edge_is_rejected() {
    let mut robot = robot_5x5();
    robot.place(IVec2::new(0, 0), Orientation::South);
    assert!(!robot.move_forward(1), "moving off the table must be rejected");
    assert_eq!(robot.pose().unwrap().position, IVec2::new(0, 0), "pose must be unchanged");
    assert_eq!(robot.pose().unwrap().facing, Orientation::South);
}

#[test]
fn move_at_northern_corner_is_rejected() {
    let mut robot = robot_5x5();
    robot.place(IVec2::new(5, 5), Orientation::North);
    assert!(!robot.move_forward(1));
    assert_eq!(robot.pose().unwrap().position, IVec2::new(5, 5));
}

#[test]
fn zero_distance_move_reports_no_change() {
    let mut robot = robot_5x5();
    robot.place(IVec2::new(2, 2), Orientation::East);
    assert!(!robot.move_forward(0));
    assert_eq!(robot.pose().unwrap().position, IVec2::new(2, 2));
}

#[test]
fn unplaced_robot_ignores_move_and_rotate() {
    let mut robot = robot_5x5();
    assert!(!robot.is_placed());
    assert!(!robot.move_forward(1));
    assert_eq!(robot.rotate(Rotation::Left), None);
    assert_eq!(robot.pose(), None);
}

#[test]
fn replacement_fully_overwrites_the_pose() {
    let mut robot = robot_5x5();
    robot.place(IVec2::new(0, 0), Orientation::North);
    robot.place(IVec2::new(2, 2), Orientation::South);

    let pose = robot.pose().unwrap();
    assert_eq!(pose.position, IVec2::new(2, 2));
    assert_eq!(pose.facing, Orientation::South);
}

#[test]
fn placement_outside_the_area_is_accepted() {
    // Only MOVE validates bounds; PLACE takes the coordinates as given.
    let mut robot = robot_5x5();
    robot.place(IVec2::new(9, 9), Orientation::North);
    assert!(robot.is_placed());
    assert_eq!(robot.pose().unwrap().position, IVec2::new(9, 9));
    // Every onward move from out there is rejected.
    assert!(!robot.move_forward(1));
}

#[test]
fn report_is_idempotent_between_mutations() {
    let mut robot = robot_5x5();
    robot.place(IVec2::new(1, 3), Orientation::West);
    let first = robot.pose();
    let second = robot.pose();
    assert_eq!(first, second);
}

#[test]
fn pose_renders_the_report_form() {
    let mut robot = robot_5x5();
    robot.place(IVec2::new(0, 1), Orientation::North);
    assert_eq!(robot.pose().unwrap().to_string(), "(0,1,NORTH)");
}
