pub mod calendarerror;

pub mod configuration;

pub mod annotation {
    pub mod dayclass;
    pub mod holidaywindow;
    pub mod calendarannotationservice;
}

pub mod region {
    pub mod bundesland;
    pub mod regionalholidaytable;
}

pub mod time {
    pub mod holidayrecord;
    pub mod rangeofdates;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
        pub mod adventrelatedholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod holidaygenerator;
    }
}

pub mod vacation {
    pub mod vacationinterval;
    pub mod vacationmatcher;
}
