//! Response bodies shared across resources. Password hashes never leave
//! the repo layer.

use serde::Serialize;

use crate::entities::{admins, departments, faculty, students};
use crate::repos::courses::Course;
use crate::repos::enrollments::Enrollment;
use crate::repos::principals::Principal;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StudentOut {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
}

impl From<students::Model> for StudentOut {
    fn from(m: students::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            mobile: m.mobile,
        }
    }
}

/// Faculty and admins share the same public shape.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StaffOut {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<faculty::Model> for StaffOut {
    fn from(m: faculty::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
        }
    }
}

impl From<admins::Model> for StaffOut {
    fn from(m: admins::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
        }
    }
}

/// Public view of any principal; students keep their `mobile` field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PrincipalOut {
    Student(StudentOut),
    Staff(StaffOut),
}

impl From<Principal> for PrincipalOut {
    fn from(p: Principal) -> Self {
        match p {
            Principal::Student(m) => PrincipalOut::Student(m.into()),
            Principal::Faculty(m) => PrincipalOut::Staff(m.into()),
            Principal::Admin(m) => PrincipalOut::Staff(m.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CourseOut {
    pub id: i64,
    pub name: String,
    pub department_id: i64,
    pub department: Option<departments::Model>,
}

impl From<(Course, Option<departments::Model>)> for CourseOut {
    fn from((course, department): (Course, Option<departments::Model>)) -> Self {
        Self {
            id: course.id,
            name: course.name,
            department_id: course.department_id,
            department,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EnrollmentOut {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub student: Option<StudentOut>,
    pub course: Option<CourseOut>,
}

impl EnrollmentOut {
    pub fn new(
        enrollment: Enrollment,
        student: Option<StudentOut>,
        course: Option<CourseOut>,
    ) -> Self {
        Self {
            id: enrollment.id,
            student_id: enrollment.student_id,
            course_id: enrollment.course_id,
            student,
            course,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Deleted {
    pub detail: String,
}

impl Deleted {
    pub fn entity(label: &str) -> Self {
        Self {
            detail: format!("{label} deleted successfully"),
        }
    }
}
