//! English/Arabic language selection and the UI string catalog.

use serde::{Deserialize, Serialize};

/// Display language. Arabic renders right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    /// Value for the HTML `dir` attribute.
    pub fn dir(&self) -> &'static str {
        match self {
            Lang::En => "ltr",
            Lang::Ar => "rtl",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Lang::En => Lang::Ar,
            Lang::Ar => Lang::En,
        }
    }

    /// Parse a language code such as `ar`, `AR` or `ar-EG`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or("");
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "ar" => Some(Lang::Ar),
            _ => None,
        }
    }

    /// Pick the best supported language from an `Accept-Language` header.
    /// Highest q-weight wins, ties go to the earlier entry, `q=0` and
    /// non-finite weights exclude.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut best: Option<(Lang, f32)> = None;
        for entry in header.split(',') {
            let mut parts = entry.split(';');
            let tag = parts.next().unwrap_or("").trim();
            let q = parts
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|v| v.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            if !q.is_finite() || q <= 0.0 {
                continue;
            }
            if let Some(lang) = Lang::from_code(tag) {
                if best.map_or(true, |(_, best_q)| q > best_q) {
                    best = Some((lang, q));
                }
            }
        }
        best.map(|(lang, _)| lang)
    }

    /// Name of the *other* language, shown on the toggle button.
    pub fn switch_label(&self) -> &'static str {
        match self {
            Lang::En => "العربية",
            Lang::Ar => "English",
        }
    }
}

/// Keys of the bilingual string catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    // Chrome
    AppName,
    Home,
    Jobs,
    Contact,
    Login,
    Logout,
    Register,
    Dashboard,
    Loading,
    Retry,
    NoResults,
    LoadFailed,
    SomethingWentWrong,
    TooManyRequests,
    NotFoundTitle,
    NotFoundBody,
    BackHome,
    Forbidden,
    // Search and pagination
    Search,
    SearchPlaceholder,
    AllLocations,
    AllCategories,
    AllTypes,
    AllStatuses,
    AllRoles,
    Previous,
    Next,
    Page,
    Of,
    // Actions
    Save,
    Saved,
    Apply,
    Applied,
    Cancel,
    Submit,
    Close,
    Delete,
    Edit,
    View,
    Approve,
    Decline,
    Activate,
    Deactivate,
    Withdraw,
    SubmitForReview,
    SaveDraft,
    MarkRead,
    MarkReplied,
    Archive,
    ClearFilters,
    Remove,
    // Fields
    Title,
    TitleAr,
    Description,
    DescriptionAr,
    Company,
    Location,
    Category,
    JobType,
    Salary,
    SalaryMin,
    SalaryMax,
    Currency,
    Remote,
    Posted,
    Status,
    Actions,
    Email,
    Password,
    Name,
    NameAr,
    FullName,
    Subject,
    Message,
    Role,
    Active,
    Inactive,
    CoverLetter,
    ResumeUrl,
    Headline,
    Skills,
    SkillsHint,
    ExperienceYears,
    Bio,
    Website,
    Industry,
    CompanySize,
    LogoUrl,
    Applicant,
    AppliedOn,
    DeclineReason,
    EmployerNote,
    // Pages
    HeroTitle,
    HeroSubtitle,
    LatestJobs,
    ViewAllJobs,
    JobDetails,
    LoginToApply,
    ContactTitle,
    ContactSubtitle,
    SendMessage,
    LoginTitle,
    RegisterTitle,
    NoAccount,
    HaveAccount,
    IAmEmployer,
    IAmEmployee,
    Users,
    Contacts,
    Analytics,
    PendingJobs,
    AllJobs,
    MyJobs,
    NewJob,
    EditJob,
    Applications,
    MyApplications,
    SavedJobs,
    Profile,
    CompanyProfile,
    Candidate,
    // Decline dialog
    DeclineJobTitle,
    DeclineJobPrompt,
    DeclineReasonRequired,
    // Dashboard tiles
    TotalUsers,
    Employers,
    Employees,
    TotalJobs,
    ActiveJobs,
    PendingReview,
    TotalApplications,
    NewApplications,
    Interviews,
    AcceptedOffers,
    NewContacts,
    RecentJobs,
    RecentApplications,
    RecommendedJobs,
    JobsByStatus,
    ApplicationsByStatus,
    JobsByCategory,
    SignupsLast30Days,
    // Outcome messages
    JobCreated,
    JobUpdated,
    JobDeleted,
    JobSubmitted,
    JobApproved,
    JobDeclined,
    JobClosed,
    ApplicationSubmitted,
    ApplicationWithdrawn,
    ApplicationUpdated,
    JobSaved,
    JobUnsaved,
    ProfileSaved,
    ContactReceived,
    ContactUpdated,
    UserUpdated,
    LoggedOut,
}

impl Msg {
    pub fn text(self, lang: Lang) -> &'static str {
        let (en, ar) = self.pair();
        match lang {
            Lang::En => en,
            Lang::Ar => ar,
        }
    }

    fn pair(self) -> (&'static str, &'static str) {
        match self {
            Msg::AppName => ("JobBoard", "لوحة الوظائف"),
            Msg::Home => ("Home", "الرئيسية"),
            Msg::Jobs => ("Jobs", "الوظائف"),
            Msg::Contact => ("Contact", "اتصل بنا"),
            Msg::Login => ("Log in", "تسجيل الدخول"),
            Msg::Logout => ("Log out", "تسجيل الخروج"),
            Msg::Register => ("Sign up", "إنشاء حساب"),
            Msg::Dashboard => ("Dashboard", "لوحة التحكم"),
            Msg::Loading => ("Loading…", "جارٍ التحميل…"),
            Msg::Retry => ("Retry", "إعادة المحاولة"),
            Msg::NoResults => ("No results found.", "لا توجد نتائج."),
            Msg::LoadFailed => ("Could not load data.", "تعذّر تحميل البيانات."),
            Msg::SomethingWentWrong => (
                "Something went wrong. Please try again.",
                "حدث خطأ ما. يرجى المحاولة مرة أخرى.",
            ),
            Msg::TooManyRequests => (
                "Too many attempts. Please wait a minute and try again.",
                "محاولات كثيرة. يرجى الانتظار دقيقة ثم المحاولة مجددًا.",
            ),
            Msg::NotFoundTitle => ("Page not found", "الصفحة غير موجودة"),
            Msg::NotFoundBody => (
                "The page you are looking for does not exist.",
                "الصفحة التي تبحث عنها غير موجودة.",
            ),
            Msg::BackHome => ("Back to home", "العودة إلى الرئيسية"),
            Msg::Forbidden => (
                "Your account does not have access to this page.",
                "لا يملك حسابك صلاحية الوصول إلى هذه الصفحة.",
            ),

            Msg::Search => ("Search", "بحث"),
            Msg::SearchPlaceholder => ("Job title, company or keyword", "المسمى الوظيفي أو الشركة أو كلمة مفتاحية"),
            Msg::AllLocations => ("All locations", "كل المواقع"),
            Msg::AllCategories => ("All categories", "كل الفئات"),
            Msg::AllTypes => ("All types", "كل الأنواع"),
            Msg::AllStatuses => ("All statuses", "كل الحالات"),
            Msg::AllRoles => ("All roles", "كل الأدوار"),
            Msg::Previous => ("Previous", "السابق"),
            Msg::Next => ("Next", "التالي"),
            Msg::Page => ("Page", "صفحة"),
            Msg::Of => ("of", "من"),

            Msg::Save => ("Save", "حفظ"),
            Msg::Saved => ("Saved", "محفوظة"),
            Msg::Apply => ("Apply now", "قدّم الآن"),
            Msg::Applied => ("Applied", "تم التقديم"),
            Msg::Cancel => ("Cancel", "إلغاء"),
            Msg::Submit => ("Submit", "إرسال"),
            Msg::Close => ("Close", "إغلاق"),
            Msg::Delete => ("Delete", "حذف"),
            Msg::Edit => ("Edit", "تعديل"),
            Msg::View => ("View", "عرض"),
            Msg::Approve => ("Approve", "قبول"),
            Msg::Decline => ("Decline", "رفض"),
            Msg::Activate => ("Activate", "تفعيل"),
            Msg::Deactivate => ("Deactivate", "إيقاف"),
            Msg::Withdraw => ("Withdraw", "سحب الطلب"),
            Msg::SubmitForReview => ("Submit for review", "إرسال للمراجعة"),
            Msg::SaveDraft => ("Save as draft", "حفظ كمسودة"),
            Msg::MarkRead => ("Mark read", "تعليم كمقروء"),
            Msg::MarkReplied => ("Mark replied", "تعليم كمُجاب"),
            Msg::Archive => ("Archive", "أرشفة"),
            Msg::ClearFilters => ("Clear filters", "مسح عوامل التصفية"),
            Msg::Remove => ("Remove", "إزالة"),

            Msg::Title => ("Title", "المسمى الوظيفي"),
            Msg::TitleAr => ("Title (Arabic)", "المسمى الوظيفي (بالعربية)"),
            Msg::Description => ("Description", "الوصف"),
            Msg::DescriptionAr => ("Description (Arabic)", "الوصف (بالعربية)"),
            Msg::Company => ("Company", "الشركة"),
            Msg::Location => ("Location", "الموقع"),
            Msg::Category => ("Category", "الفئة"),
            Msg::JobType => ("Job type", "نوع الوظيفة"),
            Msg::Salary => ("Salary", "الراتب"),
            Msg::SalaryMin => ("Minimum salary", "الحد الأدنى للراتب"),
            Msg::SalaryMax => ("Maximum salary", "الحد الأعلى للراتب"),
            Msg::Currency => ("Currency", "العملة"),
            Msg::Remote => ("Remote", "عن بُعد"),
            Msg::Posted => ("Posted", "تاريخ النشر"),
            Msg::Status => ("Status", "الحالة"),
            Msg::Actions => ("Actions", "الإجراءات"),
            Msg::Email => ("Email", "البريد الإلكتروني"),
            Msg::Password => ("Password", "كلمة المرور"),
            Msg::Name => ("Name", "الاسم"),
            Msg::NameAr => ("Name (Arabic)", "الاسم (بالعربية)"),
            Msg::FullName => ("Full name", "الاسم الكامل"),
            Msg::Subject => ("Subject", "الموضوع"),
            Msg::Message => ("Message", "الرسالة"),
            Msg::Role => ("Role", "الدور"),
            Msg::Active => ("Active", "نشط"),
            Msg::Inactive => ("Inactive", "غير نشط"),
            Msg::CoverLetter => ("Cover letter", "خطاب التقديم"),
            Msg::ResumeUrl => ("Resume link", "رابط السيرة الذاتية"),
            Msg::Headline => ("Headline", "المسمى المهني"),
            Msg::Skills => ("Skills", "المهارات"),
            Msg::SkillsHint => ("Separate skills with commas", "افصل المهارات بفواصل"),
            Msg::ExperienceYears => ("Years of experience", "سنوات الخبرة"),
            Msg::Bio => ("About you", "نبذة عنك"),
            Msg::Website => ("Website", "الموقع الإلكتروني"),
            Msg::Industry => ("Industry", "القطاع"),
            Msg::CompanySize => ("Company size", "حجم الشركة"),
            Msg::LogoUrl => ("Logo link", "رابط الشعار"),
            Msg::Applicant => ("Applicant", "المتقدم"),
            Msg::AppliedOn => ("Applied on", "تاريخ التقديم"),
            Msg::DeclineReason => ("Decline reason", "سبب الرفض"),
            Msg::EmployerNote => ("Note to the applicant", "ملاحظة للمتقدم"),

            Msg::HeroTitle => ("Find your next job", "ابحث عن وظيفتك القادمة"),
            Msg::HeroSubtitle => (
                "Browse approved openings from employers across the region.",
                "تصفّح الوظائف المعتمدة من أصحاب العمل في المنطقة.",
            ),
            Msg::LatestJobs => ("Latest jobs", "أحدث الوظائف"),
            Msg::ViewAllJobs => ("View all jobs", "عرض كل الوظائف"),
            Msg::JobDetails => ("Job details", "تفاصيل الوظيفة"),
            Msg::LoginToApply => ("Log in as a job seeker to apply", "سجّل الدخول كباحث عن عمل للتقديم"),
            Msg::ContactTitle => ("Contact us", "تواصل معنا"),
            Msg::ContactSubtitle => (
                "Questions about a listing or your account? Send us a message.",
                "لديك سؤال حول وظيفة أو حسابك؟ أرسل لنا رسالة.",
            ),
            Msg::SendMessage => ("Send message", "إرسال الرسالة"),
            Msg::LoginTitle => ("Welcome back", "مرحبًا بعودتك"),
            Msg::RegisterTitle => ("Create your account", "أنشئ حسابك"),
            Msg::NoAccount => ("No account yet?", "ليس لديك حساب؟"),
            Msg::HaveAccount => ("Already registered?", "لديك حساب بالفعل؟"),
            Msg::IAmEmployer => ("I am hiring", "أنا صاحب عمل"),
            Msg::IAmEmployee => ("I am looking for a job", "أنا أبحث عن عمل"),
            Msg::Users => ("Users", "المستخدمون"),
            Msg::Contacts => ("Messages", "الرسائل"),
            Msg::Analytics => ("Analytics", "التحليلات"),
            Msg::PendingJobs => ("Pending approval", "بانتظار الموافقة"),
            Msg::AllJobs => ("All jobs", "كل الوظائف"),
            Msg::MyJobs => ("My jobs", "وظائفي"),
            Msg::NewJob => ("Post a job", "نشر وظيفة"),
            Msg::EditJob => ("Edit job", "تعديل الوظيفة"),
            Msg::Applications => ("Applications", "الطلبات"),
            Msg::MyApplications => ("My applications", "طلباتي"),
            Msg::SavedJobs => ("Saved jobs", "الوظائف المحفوظة"),
            Msg::Profile => ("Profile", "الملف الشخصي"),
            Msg::CompanyProfile => ("Company profile", "ملف الشركة"),
            Msg::Candidate => ("Candidate", "المرشح"),

            Msg::DeclineJobTitle => ("Decline job", "رفض الوظيفة"),
            Msg::DeclineJobPrompt => (
                "Tell the employer why this listing was declined.",
                "أخبر صاحب العمل بسبب رفض هذا الإعلان.",
            ),
            Msg::DeclineReasonRequired => ("A decline reason is required", "سبب الرفض مطلوب"),

            Msg::TotalUsers => ("Users", "المستخدمون"),
            Msg::Employers => ("Employers", "أصحاب العمل"),
            Msg::Employees => ("Job seekers", "الباحثون عن عمل"),
            Msg::TotalJobs => ("Jobs", "الوظائف"),
            Msg::ActiveJobs => ("Active jobs", "الوظائف النشطة"),
            Msg::PendingReview => ("Awaiting review", "بانتظار المراجعة"),
            Msg::TotalApplications => ("Applications", "الطلبات"),
            Msg::NewApplications => ("New applications", "طلبات جديدة"),
            Msg::Interviews => ("Interviews", "المقابلات"),
            Msg::AcceptedOffers => ("Accepted", "المقبولة"),
            Msg::NewContacts => ("New messages", "رسائل جديدة"),
            Msg::RecentJobs => ("Recent jobs", "أحدث الوظائف"),
            Msg::RecentApplications => ("Recent applications", "أحدث الطلبات"),
            Msg::RecommendedJobs => ("Recommended for you", "مقترحة لك"),
            Msg::JobsByStatus => ("Jobs by status", "الوظائف حسب الحالة"),
            Msg::ApplicationsByStatus => ("Applications by status", "الطلبات حسب الحالة"),
            Msg::JobsByCategory => ("Jobs by category", "الوظائف حسب الفئة"),
            Msg::SignupsLast30Days => ("Sign-ups, last 30 days", "التسجيلات خلال آخر 30 يومًا"),

            Msg::JobCreated => ("Job created", "تم إنشاء الوظيفة"),
            Msg::JobUpdated => ("Job updated", "تم تحديث الوظيفة"),
            Msg::JobDeleted => ("Job deleted", "تم حذف الوظيفة"),
            Msg::JobSubmitted => ("Job submitted for review", "تم إرسال الوظيفة للمراجعة"),
            Msg::JobApproved => ("Job approved", "تمت الموافقة على الوظيفة"),
            Msg::JobDeclined => ("Job declined", "تم رفض الوظيفة"),
            Msg::JobClosed => ("Job closed", "تم إغلاق الوظيفة"),
            Msg::ApplicationSubmitted => ("Application submitted", "تم إرسال الطلب"),
            Msg::ApplicationWithdrawn => ("Application withdrawn", "تم سحب الطلب"),
            Msg::ApplicationUpdated => ("Application updated", "تم تحديث الطلب"),
            Msg::JobSaved => ("Job saved", "تم حفظ الوظيفة"),
            Msg::JobUnsaved => ("Job removed from saved", "تمت إزالة الوظيفة من المحفوظات"),
            Msg::ProfileSaved => ("Profile saved", "تم حفظ الملف"),
            Msg::ContactReceived => (
                "Thanks, we received your message",
                "شكرًا، لقد استلمنا رسالتك",
            ),
            Msg::ContactUpdated => ("Message updated", "تم تحديث الرسالة"),
            Msg::UserUpdated => ("User updated", "تم تحديث المستخدم"),
            Msg::LoggedOut => ("Logged out", "تم تسجيل الخروج"),
        }
    }
}

/// Look up a catalog string.
pub fn t(lang: Lang, msg: Msg) -> &'static str {
    msg.text(lang)
}
