//! Bangla string table. Keys missing here fall back to English.

pub(super) fn lookup(key: &str) -> Option<&'static str> {
    Some(match key {
        // Navbar / Menu
        "dashboard" => "ড্যাশবোর্ড",
        "studyTracker" => "স্টাডি ট্র্যাকার",
        "myCalendar" => "আমার ক্যালেন্ডার",
        "deadlines" => "ডেডলাইন",
        "menu" => "মেনু",
        "about" => "পরিচিতি",
        "settings" => "সেটিংস",
        "theme" => "থিম",
        "language" => "ভাষা",

        // Common actions
        "addEvent" => "ইভেন্ট যোগ করুন",
        "editEvent" => "ইভেন্ট সম্পাদনা",
        "delete" => "ডিলিট",
        "view" => "দেখুন",
        "save" => "সংরক্ষণ করুন",
        "cancel" => "বাতিল",
        "close" => "বন্ধ করুন",
        "today" => "আজ",
        "back" => "ফিরে যান",
        "backToDashboard" => "ড্যাশবোর্ডে ফিরুন",
        "backToResults" => "রেজাল্টে ফিরুন",
        "confirm" => "নিশ্চিত করুন",

        // Home/Dashboard
        "search" => "ইভেন্ট খুঁজুন...",
        "month" => "মাস",
        "category" => "ক্যাটাগরি",
        "latestNews" => "সর্বশেষ খবর",
        "latestAlerts" => "সর্বশেষ নোটিশ",
        "noAnnouncements" => "সাম্প্রতিক কোনো ঘোষণা নেই",
        "noData" => "এখনও কোনো তথ্য যোগ করা হয়নি",

        // Table headings
        "university" => "বিশ্ববিদ্যালয়",
        "examDate" => "পরীক্ষার তারিখ",
        "timeLeft" => "সময় বাকি",

        // Event fields
        "eligibility" => "যোগ্যতা",
        "website" => "ওয়েবসাইট",
        "admitCard" => "অ্যাডমিট কার্ড",
        "notes" => "নোট",
        "date" => "তারিখ",
        "title" => "শিরোনাম",

        // Time / Time slot
        "time" => "সময়",
        "startTime" => "শুরুর সময়",
        "endTime" => "শেষ সময়",
        "timeNotSet" => "সময় সেট করা হয়নি",
        "setTime" => "সময় সেট করুন",
        "addTime" => "সময় যোগ করুন",
        "updateTime" => "সময় আপডেট করুন",

        // Status text
        "examHasEnded" => "পরীক্ষা শেষ হয়েছে",
        "timeUp" => "সময় শেষ",
        "comingSoon" => "শিগগিরই আসছে",
        "downloadAvailable" => "ডাউনলোড করা যাবে",

        // Confirmations / messages
        "confirmDeleteEvent" => "আপনি কি ইভেন্টটি ডিলিট করতে চান?",
        "confirmDeleteDeadline" => "আপনি কি ডেডলাইনটি ডিলিট করতে চান?",
        "viewDetails" => "বিস্তারিত দেখুন",
        "eventNotFound" => "ইভেন্ট পাওয়া যায়নি",
        "loading" => "লোড হচ্ছে...",
        "titleAndDateRequired" => "শিরোনাম এবং তারিখ প্রয়োজন।",
        "saved" => "সংরক্ষণ করা হয়েছে",
        "deleted" => "মুছে ফেলা হয়েছে",

        // Study tracker
        "todayStudy" => "আজকের পড়া",
        "thisWeek" => "এই সপ্তাহ",
        "mins" => "মিনিট",
        "addSession" => "সেশন যোগ করুন",
        "subject" => "বিষয়",

        // Deadlines
        "addDeadline" => "ডেডলাইন যোগ করুন",
        "newDeadline" => "নতুন ডেডলাইন",
        "priority" => "অগ্রাধিকার",
        "daysLeft" => "দিন বাকি",
        "saveDeadline" => "ডেডলাইন সংরক্ষণ করুন",
        "high" => "উচ্চ",
        "medium" => "মাঝারি",
        "low" => "কম",

        // Misc / Labels
        "admissionPortal" => "অ্যাডমিশন পোর্টাল",
        "importantNotes" => "বিশেষ দ্রষ্টব্য",
        "eligibilityRequirements" => "যোগ্যতা ও শর্তাবলী",

        _ => return None,
    })
}
