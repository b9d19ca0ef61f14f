pub mod applicants;
pub mod recruit_qualifications;
