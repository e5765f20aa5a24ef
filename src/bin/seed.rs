use career_findr::{
    domain::{
        AnnouncementData, AnnouncementType, Audience, CreateCourseRequest, CreateJobRequest,
        CreateUserRequest, FacultyData, ListingStatus, UserRole,
    },
    repository::{
        AnnouncementRepository, SqliteAnnouncementRepository,
        CourseRepository, SqliteCourseRepository,
        FacultyRepository, SqliteFacultyRepository,
        JobRepository, SqliteJobRepository,
        UserRepository, SqliteUserRepository,
    },
};
use chrono::{Duration, Utc};
use clap::Parser;
use fake::{
    faker::{
        address::en::CityName,
        boolean::en::Boolean,
        company::en::{Buzzword, CompanyName},
        internet::en::SafeEmail,
        job::en::Title as JobTitle,
        lorem::en::{Paragraph, Sentence, Words},
        name::en::Name,
    },
    Fake,
};
use sqlx::sqlite::SqlitePoolOptions;

/// Fills a database with demo users, listings, faculties and announcements.
#[derive(Parser, Debug)]
#[command(name = "seed", version, about = "Seed the Career Findr database with demo data")]
struct Args {
    #[arg(long, default_value = "sqlite://career_findr.db?mode=rwc")]
    database_url: String,

    /// Courses per institute
    #[arg(long, default_value_t = 4)]
    courses: usize,

    /// Jobs per company
    #[arg(long, default_value_t = 4)]
    jobs: usize,

    /// Faculties per institute
    #[arg(long, default_value_t = 3)]
    faculties: usize,
}

const LEVELS: [&str; 3] = ["Certificate", "Diploma", "Degree"];
const MODES: [&str; 3] = ["Full-time", "Part-time", "Online"];
const JOB_TYPES: [&str; 3] = ["Full-time", "Part-time", "Internship"];

fn pick<'a>(options: &[&'a str]) -> &'a str {
    options[(0..options.len()).fake::<usize>()]
}

fn words(min: usize, max: usize) -> Vec<String> {
    Words(min..max).fake()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    println!("🌱 Starting database seeding...");

    let db_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&args.database_url)
        .await?;

    println!("📋 Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await?;

    let user_repo = SqliteUserRepository::new(db_pool.clone());
    let course_repo = SqliteCourseRepository::new(db_pool.clone());
    let job_repo = SqliteJobRepository::new(db_pool.clone());
    let faculty_repo = SqliteFacultyRepository::new(db_pool.clone());
    let announcement_repo = SqliteAnnouncementRepository::new(db_pool.clone());

    // Uids match accounts that must also exist in the identity provider
    println!("👥 Creating users...");
    let fixtures = [
        ("seed-admin", "admin@careerfindr.local", "Admin User", UserRole::Admin),
        ("seed-student", "student@careerfindr.local", "Sam Student", UserRole::Student),
        ("seed-institute", "institute@careerfindr.local", "Northgate Polytechnic", UserRole::Institute),
        ("seed-company", "company@careerfindr.local", "Brightwave Labs", UserRole::Company),
    ];
    let fixture_count = fixtures.len();
    for (uid, email, name, role) in fixtures {
        user_repo.upsert(CreateUserRequest {
            uid: uid.to_string(),
            email: email.to_string(),
            display_name: name.to_string(),
            role,
        }).await?;
    }
    for i in 0..5 {
        user_repo.upsert(CreateUserRequest {
            uid: format!("seed-student-{}", i),
            email: SafeEmail().fake(),
            display_name: Name().fake(),
            role: UserRole::Student,
        }).await?;
    }
    println!("  ✅ Created {} users", fixture_count + 5);

    println!("🎓 Creating courses...");
    for i in 0..args.courses {
        let title = format!("{} in {}", pick(&LEVELS), Buzzword().fake::<String>());
        course_repo.create(CreateCourseRequest {
            title,
            institution_id: "seed-institute".to_string(),
            institution_name: "Northgate Polytechnic".to_string(),
            description: Paragraph(2..4).fake(),
            duration: Some(format!("{} years", (1u8..5).fake::<u8>())),
            fee: Some(format!("M{}", (5u32..60).fake::<u32>() * 1000)),
            status: if i % 4 == 3 { ListingStatus::Closed } else { ListingStatus::Active },
            level: Some(pick(&LEVELS).to_string()),
            degree: None,
            mode: Some(pick(&MODES).to_string()),
            location: Some(CityName().fake()),
            language: Some("English".to_string()),
            credits: Some((60i64..240).fake::<i64>()),
            start_date: Some(Utc::now() + Duration::days((30i64..120).fake::<i64>())),
            deadline: Some(Utc::now() + Duration::days((7i64..30).fake::<i64>())),
            prerequisites: vec![Sentence(3..6).fake()],
            skills: words(2, 5),
            curriculum: words(3, 6),
        }).await?;
    }
    println!("  ✅ Created {} courses", args.courses);

    println!("💼 Creating jobs...");
    for i in 0..args.jobs {
        let remote: bool = Boolean(30).fake();
        job_repo.create(CreateJobRequest {
            title: JobTitle().fake(),
            company_id: "seed-company".to_string(),
            company_name: CompanyName().fake(),
            description: Paragraph(2..4).fake(),
            location: Some(CityName().fake()),
            salary: Some(format!("M{} - M{}", (8u32..15).fake::<u32>() * 1000, (15u32..30).fake::<u32>() * 1000)),
            job_type: Some(pick(&JOB_TYPES).to_string()),
            work_mode: Some(if remote { "Remote" } else { "On-site" }.to_string()),
            remote,
            department: Some(Buzzword().fake()),
            experience: Some(format!("{}+ years", (0u8..6).fake::<u8>())),
            positions: Some((1i64..4).fake::<i64>()),
            status: if i % 4 == 3 { ListingStatus::Closed } else { ListingStatus::Active },
            deadline: Some(Utc::now() + Duration::days((7i64..45).fake::<i64>())),
            requirements: vec![Sentence(4..8).fake(), Sentence(4..8).fake()],
            responsibilities: vec![Sentence(4..8).fake(), Sentence(4..8).fake()],
            skills: words(2, 5),
            benefits: words(1, 3),
        }).await?;
    }
    println!("  ✅ Created {} jobs", args.jobs);

    println!("🏛️  Creating faculties...");
    for _ in 0..args.faculties {
        faculty_repo.create("seed-institute", FacultyData {
            name: format!("Faculty of {}", Buzzword().fake::<String>()),
            description: Sentence(6..12).fake(),
            dean: Name().fake(),
            contact_email: SafeEmail().fake(),
            departments: words(2, 4),
        }).await?;
    }
    println!("  ✅ Created {} faculties", args.faculties);

    println!("📢 Creating announcements...");
    let announcements = [
        ("Welcome to Career Findr", "Browse courses and jobs, and save the ones you like.", AnnouncementType::Info, Audience::All, true),
        ("Applications closing soon", "Several course intakes close this month.", AnnouncementType::Warning, Audience::Student, true),
        ("Publish your faculties", "Institutions can now list their faculties and departments.", AnnouncementType::Success, Audience::Institute, true),
        ("Scheduled maintenance", "Job postings may be briefly unavailable on Sunday.", AnnouncementType::Error, Audience::Company, false),
    ];
    let announcement_count = announcements.len();
    for (title, message, announcement_type, target_audience, is_active) in announcements {
        announcement_repo.create(AnnouncementData {
            title: title.to_string(),
            message: message.to_string(),
            announcement_type,
            target_audience,
            is_active,
        }).await?;
    }
    println!("  ✅ Created {} announcements", announcement_count);

    println!("\n✨ Database seeding complete!");
    println!("   Users are keyed by uid; create matching accounts in the identity provider to sign in.");

    Ok(())
}
