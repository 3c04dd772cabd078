/// User role selected at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Mentor,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Студент",
            Role::Mentor => "Ментор",
        }
    }
}

/// Profile of a logged-in student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProfile {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub group: String,
    pub course: u8,
}

/// Profile of a logged-in mentor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorProfile {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub department: String,
    pub experience_years: u8,
}

/// The identity produced by login.
///
/// The shape depends on the role: students carry a group and course,
/// mentors a department and years of experience. The router keeps the
/// profile inside its logged-in view variants, so a session without a
/// profile cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserProfile {
    Student(StudentProfile),
    Mentor(MentorProfile),
}

impl UserProfile {
    pub fn role(&self) -> Role {
        match self {
            UserProfile::Student(_) => Role::Student,
            UserProfile::Mentor(_) => Role::Mentor,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            UserProfile::Student(p) => &p.name,
            UserProfile::Mentor(p) => &p.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            UserProfile::Student(p) => &p.email,
            UserProfile::Mentor(p) => &p.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_matches_profile_shape() {
        let student = UserProfile::Student(StudentProfile {
            id: 1,
            name: "Анна Петрова".to_string(),
            email: "anna.petrova@example.com".to_string(),
            group: "ИС-21-1".to_string(),
            course: 3,
        });
        assert_eq!(student.role(), Role::Student);
        assert_eq!(student.name(), "Анна Петрова");

        let mentor = UserProfile::Mentor(MentorProfile {
            id: 1,
            name: "Дмитрий Сидоров".to_string(),
            email: "dmitry.sidorov@example.com".to_string(),
            department: "Кафедра информационных систем".to_string(),
            experience_years: 5,
        });
        assert_eq!(mentor.role(), Role::Mentor);
        assert_eq!(mentor.email(), "dmitry.sidorov@example.com");
    }
}
