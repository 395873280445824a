//! Regulation blind-football pitch measurements, in metres.
//!
//! IBSA rules: pitch 40 x 20, goal mouth 3.66 wide (posts 2.14 high, out of
//! the drawing plane), penalty-area radius 6, penalty spot 6 from the goal
//! line with the double penalty spot 2 behind it.

/// Full pitch length along the long axis.
pub const LENGTH: f64 = 40.0;
/// Pitch width along the short axis.
pub const WIDTH: f64 = 20.0;
/// Long-axis coordinate of the centre line; also the length of a half view.
pub const HALF_LENGTH: f64 = 20.0;

/// The dashed third lines sit 12 m in from each goal line.
pub const THIRD_NEAR: f64 = 12.0;
pub const THIRD_FAR: f64 = 28.0;

/// Centre circle radius.
pub const CENTRE_RADIUS: f64 = 6.0;
/// Radius of the centre, penalty and double-penalty spots.
pub const SPOT_RADIUS: f64 = 0.12;

/// Penalty spot distance from the goal line.
pub const PENALTY_SPOT: f64 = 6.0;
/// Double penalty spot distance from the goal line, 2 m behind the penalty spot.
pub const DOUBLE_PENALTY_SPOT: f64 = 8.0;

/// Goalkeeper area: 2 m deep, spanning 5.82 m centred on the goal.
pub const KEEPER_DEPTH: f64 = 2.0;
pub const KEEPER_TOP: f64 = 12.91;
pub const KEEPER_BOTTOM: f64 = 7.09;

/// Penalty area: quarter-arcs of radius 6 anchored on the goal line.
pub const PENALTY_RADIUS: f64 = 6.0;

/// The 3.66 m goal mouth, centred on the halfway width. The penalty-area
/// arcs are centred on these same two heights.
pub const GOAL_TOP: f64 = 11.83;
pub const GOAL_BOTTOM: f64 = 8.17;

/// Default stroke width for lines, in display points.
pub const LINE_WIDTH: f64 = 1.5;
/// Stroke width for circles, arcs and the penalty-area chord.
pub const MARK_WIDTH: f64 = 1.0;
/// Stroke width for the goal segments.
pub const GOAL_LINE_WIDTH: f64 = 3.5;

/// Dash pattern of the third lines, on/off in display points.
pub const THIRD_DASH_ON: f64 = 5.0;
pub const THIRD_DASH_OFF: f64 = 15.0;
