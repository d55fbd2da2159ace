use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{
    ColumnDef, ForeignKeyAction, Index, IntoIden, Table, TableCreateStatement,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Departments {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Name,
    DepartmentId,
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
    Name,
    Email,
    Mobile,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Faculty {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Admins {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Enrollments {
    Table,
    Id,
    StudentId,
    CourseId,
}

#[derive(Iden)]
enum Exams {
    Table,
    Id,
    CourseId,
    Name,
    Date,
}

#[derive(Iden)]
enum Results {
    Table,
    Id,
    ExamId,
    StudentId,
    MarksObtained,
}

#[derive(Iden)]
enum Notifications {
    Table,
    Id,
    Title,
    Message,
    UserType,
    UserId,
    CreatedAt,
}

#[derive(Iden)]
enum StudentFacultyAssignments {
    Table,
    Id,
    StudentId,
    FacultyId,
}

fn id_col<T: IntoIden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

/// Principal tables share one shape: name, unique email, password hash, timestamps.
fn principal_table<T>(
    table: T,
    id: T,
    name: T,
    email: T,
    password_hash: T,
    created_at: T,
    updated_at: T,
) -> TableCreateStatement
where
    T: IntoIden + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(id_col(id))
        .col(ColumnDef::new(name).string().not_null())
        .col(ColumnDef::new(email).string().not_null().unique_key())
        .col(ColumnDef::new(password_hash).string().not_null())
        .col(
            ColumnDef::new(created_at)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(updated_at)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // departments
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(id_col(Departments::Id))
                    .col(
                        ColumnDef::new(Departments::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // courses
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(id_col(Courses::Id))
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::DepartmentId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_department_id")
                            .from(Courses::Table, Courses::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // students (mobile is optional but unique when present)
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(id_col(Students::Id))
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(
                        ColumnDef::new(Students::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::Mobile).string().null().unique_key())
                    .col(ColumnDef::new(Students::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Students::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // faculty
        manager
            .create_table(principal_table(
                Faculty::Table,
                Faculty::Id,
                Faculty::Name,
                Faculty::Email,
                Faculty::PasswordHash,
                Faculty::CreatedAt,
                Faculty::UpdatedAt,
            ))
            .await?;

        // admins
        manager
            .create_table(principal_table(
                Admins::Table,
                Admins::Id,
                Admins::Name,
                Admins::Email,
                Admins::PasswordHash,
                Admins::CreatedAt,
                Admins::UpdatedAt,
            ))
            .await?;

        // enrollments
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(id_col(Enrollments::Id))
                    .col(ColumnDef::new(Enrollments::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Enrollments::CourseId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollments_student_id")
                            .from(Enrollments::Table, Enrollments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollments_course_id")
                            .from(Enrollments::Table, Enrollments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_enrollments_student_course")
                    .table(Enrollments::Table)
                    .col(Enrollments::StudentId)
                    .col(Enrollments::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // exams
        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(id_col(Exams::Id))
                    .col(ColumnDef::new(Exams::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Exams::Name).string().not_null())
                    .col(
                        ColumnDef::new(Exams::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exams_course_id")
                            .from(Exams::Table, Exams::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // results
        manager
            .create_table(
                Table::create()
                    .table(Results::Table)
                    .if_not_exists()
                    .col(id_col(Results::Id))
                    .col(ColumnDef::new(Results::ExamId).big_integer().not_null())
                    .col(ColumnDef::new(Results::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Results::MarksObtained).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_results_exam_id")
                            .from(Results::Table, Results::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_results_student_id")
                            .from(Results::Table, Results::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // notifications (user_id NULL = broadcast)
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(id_col(Notifications::Id))
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(
                        ColumnDef::new(Notifications::UserType)
                            .string()
                            .not_null()
                            .default("student"),
                    )
                    .col(ColumnDef::new(Notifications::UserId).big_integer().null())
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notifications_created_at")
                    .table(Notifications::Table)
                    .col(Notifications::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // student_faculty_assignments
        manager
            .create_table(
                Table::create()
                    .table(StudentFacultyAssignments::Table)
                    .if_not_exists()
                    .col(id_col(StudentFacultyAssignments::Id))
                    .col(
                        ColumnDef::new(StudentFacultyAssignments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentFacultyAssignments::FacultyId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignments_student_id")
                            .from(
                                StudentFacultyAssignments::Table,
                                StudentFacultyAssignments::StudentId,
                            )
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignments_faculty_id")
                            .from(
                                StudentFacultyAssignments::Table,
                                StudentFacultyAssignments::FacultyId,
                            )
                            .to(Faculty::Table, Faculty::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_assignments_student_faculty")
                    .table(StudentFacultyAssignments::Table)
                    .col(StudentFacultyAssignments::StudentId)
                    .col(StudentFacultyAssignments::FacultyId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse dependency order
        manager
            .drop_table(
                Table::drop()
                    .table(StudentFacultyAssignments::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Notifications::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Results::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollments::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faculty::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
