pub mod student;
pub mod workout;
pub mod checkin;

pub use student::Student;
pub use workout::{Exercise, ExerciseCategory, ExerciseResult, Workout, WorkoutStatus};
pub use checkin::{HydrationLevel, PainLevel, WeeklyCheckin};
