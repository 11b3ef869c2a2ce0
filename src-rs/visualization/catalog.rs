/// A group of suggested topics shown to learners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleCategory {
    pub category: &'static str,
    pub topics: &'static [&'static str],
}

pub const EXAMPLE_TOPICS: &[ExampleCategory] = &[
    ExampleCategory {
        category: "Data Structures",
        topics: &[
            "Binary Search Tree",
            "Hash Tables",
            "Linked Lists",
            "Stack and Queue",
            "AVL Trees",
        ],
    },
    ExampleCategory {
        category: "Algorithms",
        topics: &[
            "Merge Sort Algorithm",
            "Quick Sort Algorithm",
            "Depth-First Search",
            "Breadth-First Search",
            "Dijkstra's Algorithm",
        ],
    },
    ExampleCategory {
        category: "System Design",
        topics: &[
            "Load Balancer Architecture",
            "Database Sharding",
            "Microservices Pattern",
            "Caching Strategy (Redis)",
            "Message Queue (Kafka)",
        ],
    },
    ExampleCategory {
        category: "Programming Concepts",
        topics: &[
            "Object-Oriented Programming",
            "Recursion vs Iteration",
            "Big O Notation",
            "Dynamic Programming",
            "Memory Management",
        ],
    },
    ExampleCategory {
        category: "Web & Networks",
        topics: &[
            "How DNS Works",
            "HTTP Request Lifecycle",
            "TCP/IP Protocol Stack",
            "RESTful API Design",
            "WebSocket Communication",
        ],
    },
    ExampleCategory {
        category: "AI & ML",
        topics: &[
            "Neural Network Architecture",
            "Convolutional Neural Networks",
            "Decision Trees",
            "K-Means Clustering",
            "Gradient Descent",
        ],
    },
];
