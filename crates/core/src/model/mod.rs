mod fit;
mod ids;
mod point;
mod question;

pub use fit::{
    CurveSampling, Model, ModelKind, ModelTraits, PARABOLA_SEGMENTS, format_equation, predict,
};
pub use ids::QuestionId;
pub use point::{
    Coordinate, MAX_COORDINATE, ParseCoordinateError, Point, is_coordinate_value,
    parse_coordinate_value,
};
pub use question::{MAX_POINTS, MIN_POINTS, Question, QuestionError, QuestionRecord};
