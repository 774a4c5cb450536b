use crate::employees::{Department, Employee, EmployeeId, Position};

const SEED: &[(&str, &str, &str, &str, &str, &str, Department, &str)] = &[
    ("Ahmet", "Yılmaz", "ahmet.yilmaz@ing.com", "+(90) 532 123 45 67", "1990-04-12", "2019-09-01", Department::Analytics, "Senior"),
    ("Ayşe", "Kaya", "ayse.kaya@ing.com", "+(90) 533 234 56 78", "1993-07-23", "2021-02-15", Department::Tech, "Medior"),
    ("Mehmet", "Demir", "mehmet.demir@ing.com", "+(90) 534 345 67 89", "1988-11-02", "2015-06-01", Department::Tech, "Senior"),
    ("Elif", "Şahin", "elif.sahin@ing.com", "+(90) 535 456 78 90", "1997-01-30", "2022-08-22", Department::Analytics, "Junior"),
    ("Can", "Öztürk", "can.ozturk@ing.com", "+(90) 536 567 89 01", "1991-03-18", "2018-01-08", Department::Tech, "Medior"),
    ("Zeynep", "Arslan", "zeynep.arslan@ing.com", "+(90) 537 678 90 12", "1995-09-05", "2020-11-16", Department::Analytics, "Medior"),
    ("John", "Carter", "john.carter@ing.com", "+1 (555) 201-3344", "1986-12-14", "2016-04-04", Department::Tech, "Senior"),
    ("Emily", "Hughes", "emily.hughes@ing.com", "+44 7700 900123", "1994-06-27", "2021-05-10", Department::Analytics, "Junior"),
    ("Lukas", "Becker", "lukas.becker@ing.com", "+49 176 1234567", "1992-02-08", "2019-03-25", Department::Tech, "Medior"),
    ("Camille", "Martin", "camille.martin@ing.com", "+33 6 12 34 56 78", "1996-10-19", "2023-01-09", Department::Analytics, "Junior"),
    ("Burak", "Çelik", "burak.celik@ing.com", "+(90) 538 789 01 23", "1989-08-11", "2017-07-03", Department::Tech, "Senior"),
    ("Selin", "Aydın", "selin.aydin@ing.com", "+(90) 539 890 12 34", "1998-05-02", "2023-09-18", Department::Tech, "Junior"),
];

/// Fixed example collection used when no durable data exists
pub fn seed_employees() -> Vec<Employee> {
    SEED.iter()
        .enumerate()
        .map(
            |(index, (first, last, email, phone, dob, doe, department, position))| Employee {
                id: EmployeeId::new((index + 1).to_string()),
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                date_of_birth: dob.to_string(),
                date_of_employment: doe.to_string(),
                department: department.clone(),
                position: Position::from(position.to_string()),
            },
        )
        .collect()
}
