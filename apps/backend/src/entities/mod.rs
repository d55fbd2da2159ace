pub mod admins;
pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod exams;
pub mod faculty;
pub mod notifications;
pub mod results;
pub mod student_faculty_assignments;
pub mod students;

pub use admins::Entity as Admins;
pub use courses::Entity as Courses;
pub use departments::Entity as Departments;
pub use enrollments::Entity as Enrollments;
pub use exams::Entity as Exams;
pub use faculty::Entity as FacultyMembers;
pub use notifications::Entity as Notifications;
pub use results::Entity as ExamResults;
pub use student_faculty_assignments::Entity as StudentFacultyAssignments;
pub use students::Entity as Students;
