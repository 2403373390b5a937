//! English string table. This is also the fallback table for every other
//! language, so it must stay the most complete one.

pub(super) fn lookup(key: &str) -> Option<&'static str> {
    Some(match key {
        // Navbar / Menu
        "dashboard" => "Dashboard",
        "studyTracker" => "Study Tracker",
        "myCalendar" => "My Calendar",
        "deadlines" => "Deadlines",
        "menu" => "Menu",
        "about" => "About",
        "settings" => "Settings",
        "theme" => "Theme",
        "language" => "Language",

        // Common actions
        "addEvent" => "Add Event",
        "editEvent" => "Edit Event",
        "delete" => "Delete",
        "view" => "View",
        "save" => "Save",
        "cancel" => "Cancel",
        "close" => "Close",
        "today" => "Today",
        "back" => "Back",
        "backToDashboard" => "Back to Dashboard",
        "backToResults" => "Back to Results",
        "confirm" => "Confirm",

        // Home/Dashboard
        "search" => "Search events...",
        "month" => "Month",
        "category" => "Category",
        "latestNews" => "Latest News",
        "latestAlerts" => "Latest Alerts",
        "noAnnouncements" => "No recent announcements",
        "noData" => "No data yet",

        // Table headings
        "university" => "University",
        "examDate" => "Exam Date",
        "timeLeft" => "Time Left",

        // Event fields
        "eligibility" => "Eligibility",
        "website" => "Website",
        "admitCard" => "Admit Card",
        "notes" => "Notes",
        "date" => "Date",
        "title" => "Title",

        // Time / Time slot
        "time" => "Time",
        "startTime" => "Start time",
        "endTime" => "End time",
        "timeNotSet" => "Time not set",
        "setTime" => "Set time",
        "addTime" => "Add time",
        "updateTime" => "Update time",

        // Status text
        "examHasEnded" => "Exam has ended",
        "timeUp" => "Time Up",
        "comingSoon" => "Coming Soon",
        "downloadAvailable" => "Download Available",

        // Confirmations / messages
        "confirmDeleteEvent" => "Delete this event?",
        "confirmDeleteDeadline" => "Delete this deadline?",
        "viewDetails" => "View Details",
        "eventNotFound" => "Event not found",
        "loading" => "Loading...",
        "titleAndDateRequired" => "Title and Date are required.",
        "saved" => "Saved",
        "deleted" => "Deleted",

        // Study tracker
        "todayStudy" => "Today Study",
        "thisWeek" => "This Week",
        "mins" => "mins",
        "addSession" => "Add Session",
        "subject" => "Subject",
        "deletedSubject" => "Deleted Subject",

        // Deadlines
        "addDeadline" => "Add Deadline",
        "newDeadline" => "New Deadline",
        "priority" => "Priority",
        "daysLeft" => "Days left",
        "saveDeadline" => "Save Deadline",
        "high" => "High",
        "medium" => "Medium",
        "low" => "Low",

        // Misc / Labels
        "admissionPortal" => "Admission Portal",
        "importantNotes" => "Important Notes",
        "eligibilityRequirements" => "Eligibility & Requirements",

        _ => return None,
    })
}
