//! タスク・言語ごとの入力例
//!
//! 既知言語（python / javascript / java / cpp / go）にのみ用意している。

use crate::codegen::task::TaskKind;
use crate::domain::Language;

/// 入力例を引く。未知の言語なら None
pub fn example_input(task: TaskKind, language: &Language) -> Option<&'static str> {
    let lang = language.normalized();
    match task {
        TaskKind::Generate => generate_example(&lang),
        TaskKind::Complete => complete_example(&lang),
        TaskKind::Fix => fix_example(&lang),
        TaskKind::Test | TaskKind::Translate => function_example(&lang),
    }
}

fn generate_example(lang: &str) -> Option<&'static str> {
    match lang {
        "python" => Some("Create a function that takes a list of numbers and returns the average of the top 3 largest numbers."),
        "javascript" => Some("Write a function that fetches data from an API and displays it in an HTML table."),
        "java" => Some("Create a class representing a bank account with methods for deposit, withdrawal and balance checking."),
        "cpp" => Some("Implement a template class for a stack data structure with push, pop and peek operations."),
        "go" => Some("Write a function that reads a CSV file and returns a structured data object."),
        _ => None,
    }
}

fn complete_example(lang: &str) -> Option<&'static str> {
    match lang {
        "python" => Some(
            r#"def fibonacci(n):
    """Return the nth Fibonacci number."""
    if n <= 0:
        return 0
    elif n == 1:
        return 1
    else:"#,
        ),
        "javascript" => Some(
            "function sortUsers(users) {\n    // Sort users by age in descending order\n    ",
        ),
        "java" => Some(
            "public class BinarySearch {\n    public static int search(int[] array, int target) {\n        int left = 0;\n        int right = array.length - 1;\n        ",
        ),
        "cpp" => Some(
            "#include <vector>\n\ntemplate <typename T>\nstd::vector<T> merge(const std::vector<T>& left, const std::vector<T>& right) {\n    ",
        ),
        "go" => Some(
            "func processData(data []string) map[string]int {\n    result := make(map[string]int)\n    ",
        ),
        _ => None,
    }
}

fn fix_example(lang: &str) -> Option<&'static str> {
    match lang {
        "python" => Some(
            r#"def calculate_average(numbers):
    total = 0
    for num in numbers:
        total += num
    return total / len(numbers)

# This will crash with an empty list
print(calculate_average([]))"#,
        ),
        "javascript" => Some(
            r#"function sortArray(arr) {
    for (let i = 0; i < arr.length; i++) {
        for (let j = 0; j < arr.length; j++) {
            if (arr[i] < arr[j]) {
                let temp = arr[i];
                arr[i] = arr[j];
                arr[j] = temp;
            }
        }
    }
    return arr;
}"#,
        ),
        "java" => Some(
            r#"public class ListNode {
    int val;
    ListNode next;

    public ListNode(int val) {
        this.val = val;
    }

    public void printList() {
        ListNode current = this;
        while (current != null) {
            System.out.print(current.val + " ");
            current = next; // Bug: should be current.next
        }
    }
}"#,
        ),
        "cpp" => Some(
            r#"#include <iostream>
#include <vector>

int findMax(std::vector<int> numbers) {
    if (numbers.size() == 0) {
        return -1; // This could be a bug depending on requirements
    }

    int max = numbers[0];
    for (int i = 0; i <= numbers.size(); i++) { // Bug: should be i < numbers.size()
        if (numbers[i] > max) {
            max = numbers[i];
        }
    }
    return max;
}"#,
        ),
        "go" => Some(
            r#"func processMap(data map[string]int) int {
    total := 0
    for key, value := range data {
        if key == "special" {
            total += value * 2
        }
    }
    return total // Bug: doesn't add non-special values
}"#,
        ),
        _ => None,
    }
}

/// test / translate 用の完結した関数・クラス
fn function_example(lang: &str) -> Option<&'static str> {
    match lang {
        "python" => Some(
            r#"def bubble_sort(arr):
    n = len(arr)
    for i in range(n):
        for j in range(0, n - i - 1):
            if arr[j] > arr[j + 1]:
                arr[j], arr[j + 1] = arr[j + 1], arr[j]
    return arr"#,
        ),
        "javascript" => Some(
            r#"function calculateFactorial(n) {
    if (n === 0 || n === 1) {
        return 1;
    }
    let result = 1;
    for (let i = 2; i <= n; i++) {
        result *= i;
    }
    return result;
}"#,
        ),
        "java" => Some(
            r#"public class Rectangle {
    private double width;
    private double height;

    public Rectangle(double width, double height) {
        this.width = width;
        this.height = height;
    }

    public double getArea() {
        return width * height;
    }

    public double getPerimeter() {
        return 2 * (width + height);
    }
}"#,
        ),
        "cpp" => Some(
            r#"#include <string>

class Person {
private:
    std::string name;
    int age;

public:
    Person(std::string name, int age) : name(name), age(age) {}

    std::string getName() const {
        return name;
    }

    int getAge() const {
        return age;
    }

    void birthday() {
        age++;
    }
};"#,
        ),
        "go" => Some(
            r#"func calculateAverage(numbers []float64) float64 {
    if len(numbers) == 0 {
        return 0
    }

    var sum float64
    for _, num := range numbers {
        sum += num
    }

    return sum / float64(len(numbers))
}"#,
        ),
        _ => None,
    }
}
