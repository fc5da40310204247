//! Static page content.

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
}

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
}

pub const BIO: &[&str] = &[
    "Hello! I'm Raj Savita, an aspiring Computer Science & Engineering student at Noida Institute of Engineering and Technology. \
     My journey into the world of technology began with a passion for problem-solving and a keen interest in building interactive and efficient web applications.",
    "I thrive in fast-paced environments, constantly seeking to learn new technologies and improve my skills. \
     My experience includes developing responsive frontends, integrating RESTful APIs, and deploying applications to the cloud. \
     I am particularly enthusiastic about frontend development and creating seamless user experiences.",
    "Outside of coding, I enjoy strategic thinking, as demonstrated by my first-place achievement in the college-level Chess Tournament. \
     I also have a competitive spirit, having secured first place in Badminton Singles at the college Sports Fest.",
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Bachelor of Technology - Computer Science & Engineering",
        school: "Noida Institute of Engineering and Technology (2022 - Present)",
    },
    Education {
        degree: "CBSE, 12th",
        school: "WC Rly Sr. Sec. School (2020)",
    },
    Education {
        degree: "CBSE, 10th",
        school: "WC Rly Sr. Sec. School (2018)",
    },
];

pub const INTERESTS: &[&str] = &[
    "Web Development (Frontend)",
    "Deep Learning & AI",
    "Competitive Programming",
    "Chess",
    "Badminton",
];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Languages",
        skills: &["Java", "Python", "JavaScript", "TypeScript"],
    },
    SkillCategory {
        name: "Frontend",
        skills: &["HTML5", "CSS3", "React.js", "Next.js", "Tailwind CSS"],
    },
    SkillCategory {
        name: "Cloud & DevOps",
        skills: &["Docker", "Kubernetes", "AWS", "CI/CD"],
    },
    SkillCategory {
        name: "CS Fundamentals",
        skills: &["SQL", "DBMS", "OOPS", "OS", "CN"],
    },
    SkillCategory {
        name: "Developer Tools",
        skills: &["Git", "VS Code", "MongoDB Compass", "IntelliJ IDEA"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Web App",
        description: "Developed a fully responsive and feature-rich e-commerce frontend application using React and Next.js \
                      with TypeScript for strong type safety and scalability. Implemented key features such as product listing, \
                      category filtering, search, product detail pages, shopping cart functionality, and client-side persistence \
                      using LocalStorage.",
        tech: &["React.js", "Next.js", "TypeScript", "Tailwind CSS", "LocalStorage"],
        github: Some("https://github.com/RajSavita"),
        demo: Some("https://vercel.com/"),
    },
    Project {
        title: "Pneumonia Detection System Using Deep Learning",
        description: "Built a deep learning-based web application that classifies chest X-ray images to detect pneumonia. \
                      Utilized a Convolutional Neural Network (CNN) trained on medical image data and deployed the model \
                      using a Flask web interface for real-time predictions.",
        tech: &["Python", "Flask", "HTML5", "CSS3", "TensorFlow", "Keras", "scikit-learn", "OpenCV"],
        github: Some("https://github.com/RajSavita"),
        demo: None,
    },
    Project {
        title: "Soil Yield Prediction System (HackXNiet)",
        description: "Developed a React.js & TypeScript frontend for a Soil Yield Prediction system, integrating RESTful APIs \
                      for real-time insights. Developed a responsive frontend using HTML, CSS, and JavaScript, and integrated it \
                      with a Flask backend for real-time input handling and result display.",
        tech: &[
            "React.js",
            "TypeScript",
            "Python",
            "Flask",
            "HTML5",
            "CSS3",
            "JavaScript",
            "scikit-learn",
            "Pandas",
            "NumPy",
        ],
        github: Some("https://github.com/RajSavita"),
        demo: None,
    },
    Project {
        title: "Pneumonia Detection Web App (GeeksForGeeks Hackfest)",
        description: "Developed a responsive and user-friendly web interface for chest X-ray image upload and real-time \
                      pneumonia detection. Integrated frontend with Flask backend to process images, return predictions, and \
                      render results dynamically. Implemented input validation, visual feedback, and mobile responsiveness \
                      to enhance overall user experience.",
        tech: &["Python", "Flask", "HTML5", "CSS3"],
        github: Some("https://github.com/RajSavita"),
        demo: None,
    },
];
